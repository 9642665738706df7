//! Zip snapshot download command

use super::{Command, CommandContext};
use crate::utils::ensure_directory_exists;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Download command saving each repository's zipball under the save path
///
/// Existing archives are left untouched unless the run was started with
/// `--force`. Download failures are per-repository: they are logged and the
/// remaining repositories are still processed.
pub struct DownloadCommand;

#[async_trait]
impl Command for DownloadCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let logger = context.logger();
        let repositories = context.repositories().await?;

        if repositories.is_empty() {
            println!("{}", "No repositories matched the filters".yellow());
            return Ok(());
        }

        println!(
            "{}",
            format!("Downloading {} repositories...", repositories.len()).green()
        );
        ensure_directory_exists(&context.save_path)?;

        let mut errors = Vec::new();
        let mut successful = 0;

        for repo in &repositories {
            let target = context.save_path.join(format!("{}.zip", repo.name));

            if target.exists() && !context.force {
                logger.info(&repo.name, "Archive already exists, skipping");
                continue;
            }

            match context.client.download_zipball(&repo.api_url).await {
                Ok(body) => match std::fs::write(&target, &body) {
                    Ok(()) => {
                        logger.success(&repo.name, &format!("Saved {}", target.display()));
                        successful += 1;
                    }
                    Err(e) => {
                        logger.warn(&repo.name, &format!("Cannot write archive: {e}"));
                        errors.push((repo.name.clone(), anyhow::Error::from(e)));
                    }
                },
                Err(e) => {
                    logger.warn(&repo.name, &format!("Cannot download repo: {e}"));
                    errors.push((repo.name.clone(), e));
                }
            }
        }

        // Report summary
        if errors.is_empty() {
            println!("{}", "Done downloading repositories".green());
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

            // If every download failed, propagate so the process exits non-zero
            if successful == 0 {
                return Err(anyhow::anyhow!(
                    "All downloads failed. First error: {}",
                    errors[0].1
                ));
            }
        }

        Ok(())
    }
}
