//! Common helpers shared across git and export workflows

use colored::*;

/// Logger with consistent per-repository formatting
///
/// Each line is prefixed with the repository name in cyan/bold for easy
/// identification when many repositories are processed in one run. Debug
/// lines only appear when verbose output was requested.
#[derive(Default, Clone, Copy)]
pub struct Logger {
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn info(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg);
    }

    pub fn success(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg.green());
    }

    pub fn warn(&self, name: &str, msg: &str) {
        println!("{} | {}", name.cyan().bold(), msg.yellow());
    }

    pub fn error(&self, name: &str, msg: &str) {
        eprintln!("{} | {}", name.cyan().bold(), msg.red());
    }

    pub fn debug(&self, name: &str, msg: &str) {
        if self.verbose {
            println!("{} | {}", name.cyan().bold(), msg.dimmed());
        }
    }
}
