//! Per-repository detail fetches
//!
//! Sub-resources of one repository: stargazers, forks, and issues. Stargazer
//! and fork entries are reduced to the small [`AccountRecord`] shape before
//! export; issues are kept as the API returns them.

use super::client::GitHubClient;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The metadata kinds the JSON exporter can produce
///
/// Matched exhaustively everywhere, so an unsupported kind is
/// unrepresentable rather than a runtime dispatch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Stargazers,
    Forks,
    Issues,
}

impl ExportKind {
    /// Sub-resource path under a repository's API URL
    pub fn endpoint(&self) -> &'static str {
        match self {
            ExportKind::Stargazers => "stargazers",
            ExportKind::Forks => "forks",
            ExportKind::Issues => "issues",
        }
    }

    /// Name of the output file for a given user
    pub fn file_name(&self, login: &str) -> String {
        format!("{login}_{}.json", self.endpoint())
    }
}

/// Reduced record for a stargazer or fork entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountRecord {
    pub login: String,
    pub id: u64,
    pub node_id: String,
}

impl GitHubClient {
    /// Get the stargazers of a repository as reduced records
    pub async fn get_stargazers(&self, repo_api_url: &str) -> Result<Vec<AccountRecord>> {
        let entries = self
            .get_array(&format!("{repo_api_url}/stargazers"))
            .await?;

        entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).map_err(Into::into))
            .collect()
    }

    /// Get the forks of a repository as reduced records
    ///
    /// The login comes from the fork's owner; the id and node_id are the
    /// fork repository's own.
    pub async fn get_forks(&self, repo_api_url: &str) -> Result<Vec<AccountRecord>> {
        let entries = self.get_array(&format!("{repo_api_url}/forks")).await?;

        entries
            .into_iter()
            .map(|entry| {
                #[derive(Deserialize)]
                struct ForkEntry {
                    id: u64,
                    node_id: String,
                    owner: ForkOwner,
                }
                #[derive(Deserialize)]
                struct ForkOwner {
                    login: String,
                }

                let fork: ForkEntry = serde_json::from_value(entry)?;
                Ok(AccountRecord {
                    login: fork.owner.login,
                    id: fork.id,
                    node_id: fork.node_id,
                })
            })
            .collect()
    }

    /// Get the issues of a repository, unmodified
    pub async fn get_issues(&self, repo_api_url: &str) -> Result<Vec<Value>> {
        self.get_array(&format!("{repo_api_url}/issues")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_kind_endpoints() {
        assert_eq!(ExportKind::Stargazers.endpoint(), "stargazers");
        assert_eq!(ExportKind::Forks.endpoint(), "forks");
        assert_eq!(ExportKind::Issues.endpoint(), "issues");
    }

    #[test]
    fn test_export_kind_file_names() {
        assert_eq!(
            ExportKind::Stargazers.file_name("octocat"),
            "octocat_stargazers.json"
        );
        assert_eq!(ExportKind::Forks.file_name("octocat"), "octocat_forks.json");
        assert_eq!(
            ExportKind::Issues.file_name("octocat"),
            "octocat_issues.json"
        );
    }

    #[test]
    fn test_account_record_round_trips() {
        let record = AccountRecord {
            login: "octocat".to_string(),
            id: 1,
            node_id: "MDQ6VXNlcjE=".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"login": "octocat", "id": 1, "node_id": "MDQ6VXNlcjE="})
        );
    }
}
