//! GitHub API integration module
//!
//! This module provides the interface gh-backup uses against GitHub's REST
//! v3 API. It follows a modular design where different API concerns live in
//! separate sub-modules that extend the client with `impl` blocks:
//!
//! - [`client`]: Core client with authentication, pagination, and downloads
//! - [`repositories`]: Repository enumeration (owned or starred) and filtering
//! - [`details`]: Per-repository sub-resources (stargazers, forks, issues)

pub mod client;
pub mod details;
pub mod repositories;

// Re-export commonly used items for convenience
pub use client::GitHubClient;
pub use details::{AccountRecord, ExportKind};
pub use repositories::{RepoRef, RepoSource};
