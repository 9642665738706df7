//! Command argument validation utilities
//!
//! Centralized validation for CLI arguments after clap parsing. Handles the
//! domain rules that go beyond what the argument parser can express.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
    /// No terminal action was selected
    NoAction,
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
            CommandValidationError::NoAction => {
                write!(
                    f,
                    "No action selected. Use --stars, --forks, --issues, --save or --clone (see --help)"
                )
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

fn validation_error(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate the user login
///
/// Logins are embedded in API paths and output file names, so path
/// separators and whitespace are rejected up front.
pub fn validate_user_login(login: &str) -> Result<()> {
    if login.trim().is_empty() {
        return Err(validation_error(CommandValidationError::InvalidValue {
            argument: "user_login".to_string(),
            value: login.to_string(),
            reason: "login cannot be empty or whitespace only".to_string(),
        }));
    }

    if login.contains('/') || login.contains(char::is_whitespace) {
        return Err(validation_error(CommandValidationError::InvalidValue {
            argument: "user_login".to_string(),
            value: login.to_string(),
            reason: "login cannot contain path separators or whitespace".to_string(),
        }));
    }

    Ok(())
}

/// Validate repository names passed via `--repo_list`
pub fn validate_repo_names(repos: &[String]) -> Result<()> {
    for repo in repos {
        if repo.trim().is_empty() {
            return Err(validation_error(CommandValidationError::InvalidValue {
                argument: "repo_list".to_string(),
                value: repo.clone(),
                reason: "repository name cannot be empty or whitespace only".to_string(),
            }));
        }
    }
    Ok(())
}

/// Ensure the run selects at least one terminal action
pub fn validate_action_selected(actions: &[bool]) -> Result<()> {
    if actions.iter().any(|selected| *selected) {
        Ok(())
    } else {
        Err(validation_error(CommandValidationError::NoAction))
    }
}
