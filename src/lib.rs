//! gh-backup - A CLI tool for backing up a GitHub user's repositories

pub mod commands;
pub mod constants;
pub mod git;
pub mod github;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use github::{AccountRecord, ExportKind, GitHubClient, RepoRef, RepoSource};
