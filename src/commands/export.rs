//! JSON metadata export command
//!
//! Collects one sub-resource (stargazers, forks, or issues) for every
//! enumerated repository and writes the whole mapping to a single JSON file
//! named `<user_login>_<kind>.json`. Repositories whose detail fetch fails
//! or comes back empty are left out of the mapping entirely.

use super::{Command, CommandContext};
use crate::github::{AccountRecord, ExportKind, GitHubClient};
use crate::utils::to_ascii_pretty;
use anyhow::{Context as _, Result};
use async_trait::async_trait;
use colored::*;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Export command writing per-repository metadata to a JSON file
pub struct ExportCommand {
    pub kind: ExportKind,
    /// Directory the JSON file is written into
    pub output_dir: PathBuf,
}

impl ExportCommand {
    pub fn new(kind: ExportKind) -> Self {
        Self {
            kind,
            output_dir: PathBuf::from("."),
        }
    }

    /// Path of the file this command writes for a given user
    pub fn output_path(&self, login: &str) -> PathBuf {
        self.output_dir.join(self.kind.file_name(login))
    }
}

async fn fetch_entries(
    client: &GitHubClient,
    kind: ExportKind,
    repo_api_url: &str,
) -> Result<Vec<Value>> {
    match kind {
        ExportKind::Stargazers => to_values(client.get_stargazers(repo_api_url).await?),
        ExportKind::Forks => to_values(client.get_forks(repo_api_url).await?),
        ExportKind::Issues => client.get_issues(repo_api_url).await,
    }
}

fn to_values(records: Vec<AccountRecord>) -> Result<Vec<Value>> {
    records
        .into_iter()
        .map(|record| serde_json::to_value(record).map_err(Into::into))
        .collect()
}

#[async_trait]
impl Command for ExportCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let repositories = context.repositories().await?;

        if repositories.is_empty() {
            println!("{}", "No repositories matched the filters".yellow());
            return Ok(());
        }

        println!(
            "{}",
            format!(
                "Collecting {} for {} repositories...",
                self.kind.endpoint(),
                repositories.len()
            )
            .green()
        );

        // One key per repository, in enumeration order; failed or empty
        // fetches leave the key absent rather than null.
        let mut mapping = Map::new();
        for repo in &repositories {
            match fetch_entries(&context.client, self.kind, &repo.api_url).await {
                Ok(entries) if entries.is_empty() => {
                    logger.debug(&repo.name, &format!("No {}, skipping", self.kind.endpoint()));
                }
                Ok(entries) => {
                    logger.debug(
                        &repo.name,
                        &format!("Collected {} {}", entries.len(), self.kind.endpoint()),
                    );
                    mapping.insert(repo.name.clone(), Value::Array(entries));
                }
                Err(e) => {
                    logger.warn(
                        &repo.name,
                        &format!("Cannot get {}: {}", self.kind.endpoint(), e),
                    );
                }
            }
        }

        let path = self.output_path(&context.user_login);
        let document = to_ascii_pretty(&Value::Object(mapping))?;
        std::fs::write(&path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("{}", format!("Saved {}", path.display()).green());
        Ok(())
    }
}
