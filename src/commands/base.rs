//! Base types and traits for the command pattern

use crate::git::Logger;
use crate::github::{GitHubClient, RepoRef, RepoSource};
use crate::utils::filter_by_names;
use anyhow::Result;
use std::path::PathBuf;

/// Context passed to all commands containing shared configuration and options
pub struct CommandContext {
    /// The configured API client
    pub client: GitHubClient,
    /// Login of the user whose repositories are processed
    pub user_login: String,
    /// Whether to enumerate owned or starred repositories
    pub source: RepoSource,
    /// Whether forked repositories are included in the enumeration
    pub include_forks: bool,
    /// Optional list of repository names to restrict the run to
    pub repo_list: Vec<String>,
    /// Destination directory for zip archives and clones
    pub save_path: PathBuf,
    /// Whether existing zip archives may be overwritten
    pub force: bool,
    /// Whether debug-level output is enabled
    pub verbose: bool,
}

impl CommandContext {
    /// Enumerate the repositories this run operates on
    ///
    /// Lists owned or starred repositories (fork-filtered by the client) and
    /// applies the `--repo_list` name filter. The listing failure propagates:
    /// it is the one fatal error in a run.
    pub async fn repositories(&self) -> Result<Vec<RepoRef>> {
        let repositories = self
            .client
            .list_repositories(&self.user_login, self.source, self.include_forks)
            .await?;
        Ok(filter_by_names(&repositories, &self.repo_list))
    }

    pub fn logger(&self) -> Logger {
        Logger::new(self.verbose)
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
