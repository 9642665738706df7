//! Git clone operations
//!
//! Cloning delegates to the system `git` client rather than an in-process
//! implementation. Launch failures and non-zero exit statuses both surface
//! as errors so callers can decide how to report them; the clone commands
//! treat them as per-repository conditions and keep going.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Flags applied to every clone in one run
#[derive(Debug, Clone, Copy, Default)]
pub struct CloneOptions {
    pub bare: bool,
    pub recursive: bool,
}

/// Embed `login:token@` into an HTTPS clone URL
///
/// `https://github.com/alice/repo.git` with login `alice` and token `T`
/// becomes `https://alice:T@github.com/alice/repo.git`. Non-HTTPS URLs are
/// returned unchanged.
pub fn authenticated_clone_url(clone_url: &str, login: &str, token: &str) -> String {
    match clone_url.strip_prefix("https://") {
        Some(rest) => format!("https://{login}:{token}@{rest}"),
        None => clone_url.to_string(),
    }
}

/// Build the argument vector for one git clone invocation
pub fn build_clone_args(url: &str, target_dir: &str, options: CloneOptions) -> Vec<String> {
    let mut args = vec!["clone".to_string()];
    if options.bare {
        args.push("--bare".to_string());
    }
    if options.recursive {
        args.push("--recursive".to_string());
    }
    args.push(url.to_string());
    args.push(target_dir.to_string());
    args
}

/// Clone a repository from its URL into `<destination>/<name>`
///
/// An already-existing target directory is an error the caller is expected
/// to log and skip. Git's own failure (non-zero exit) is reported with its
/// stderr attached.
pub fn clone_repository(
    name: &str,
    url: &str,
    destination: &Path,
    options: CloneOptions,
) -> Result<()> {
    let target_dir = destination.join(name);
    if target_dir.exists() {
        anyhow::bail!(
            "Target directory already exists: {}",
            target_dir.display()
        );
    }

    let target = target_dir.to_string_lossy();
    let args = build_clone_args(url, &target, options);

    let output = Command::new("git")
        .args(&args)
        .output()
        .context("Failed to execute git clone command")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("git clone failed: {}", stderr.trim());
    }

    Ok(())
}
