//! Clone command implementation

use super::{Command, CommandContext};
use crate::git::{self, CloneOptions, authenticated_clone_url};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Clone command checking out each repository with the system git client
///
/// Repositories are cloned one at a time, in enumeration order. A failing
/// clone (including a non-zero git exit status) is logged and the run moves
/// on to the next repository.
pub struct CloneCommand {
    pub options: CloneOptions,
}

#[async_trait]
impl Command for CloneCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let repositories = context.repositories().await?;

        if repositories.is_empty() {
            println!("{}", "No repositories matched the filters".yellow());
            return Ok(());
        }

        println!(
            "{}",
            format!("Cloning {} repositories...", repositories.len()).green()
        );

        let mut errors = Vec::new();
        let mut successful = 0;

        for repo in &repositories {
            // Token goes into the URL passed to git, never into the log line
            let clone_url = match context.client.token() {
                Some(token) => authenticated_clone_url(&repo.clone_url, &context.user_login, token),
                None => repo.clone_url.clone(),
            };
            logger.info(&repo.name, &format!("Cloning from {}", repo.clone_url));

            let name = repo.name.clone();
            let destination = context.save_path.clone();
            let options = self.options;
            let result = tokio::task::spawn_blocking(move || {
                git::clone_repository(&name, &clone_url, &destination, options)
            })
            .await?;

            match result {
                Ok(()) => {
                    logger.success(&repo.name, "Successfully cloned");
                    successful += 1;
                }
                Err(e) => {
                    logger.warn(&repo.name, &format!("Cannot clone: {e}"));
                    errors.push((repo.name.clone(), e));
                }
            }
        }

        // Report summary
        if errors.is_empty() {
            println!("{}", "Done cloning repositories".green());
        } else {
            println!(
                "{}",
                format!(
                    "Completed with {} successful, {} failed",
                    successful,
                    errors.len()
                )
                .yellow()
            );

            // If all operations failed, return an error to propagate to main
            if successful == 0 {
                return Err(anyhow::anyhow!(
                    "All clone operations failed. First error: {}",
                    errors[0].1
                ));
            }
        }

        Ok(())
    }
}
