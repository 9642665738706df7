//! GitHub repository enumeration
//!
//! This module lists the repositories a user owns or has starred and turns
//! each listing entry into a [`RepoRef`]. The listing call is the one request
//! whose failure aborts the whole run: every downstream action operates on
//! its result.

use super::client::GitHubClient;
use anyhow::Result;
use serde::Deserialize;

/// Which listing endpoint to enumerate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoSource {
    /// Repositories the user owns (`users/<login>/repos`)
    Owned,
    /// Repositories the user has starred (`users/<login>/starred`)
    Starred,
}

impl RepoSource {
    pub fn endpoint(&self, login: &str) -> String {
        match self {
            RepoSource::Owned => format!("users/{login}/repos"),
            RepoSource::Starred => format!("users/{login}/starred"),
        }
    }
}

/// One repository as derived from a listing entry
///
/// `api_url` is the REST resource for further calls (stargazers, forks,
/// issues, zipball); `clone_url` is the HTTPS URL for git.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RepoRef {
    pub name: String,
    #[serde(rename = "url")]
    pub api_url: String,
    pub clone_url: String,
    #[serde(default)]
    pub fork: bool,
}

impl GitHubClient {
    /// List a user's repositories in API response order
    ///
    /// Entries flagged as forks are dropped unless `include_forks` is set.
    /// A failed request or an empty listing is an error: nothing downstream
    /// has meaning without the repository set.
    pub async fn list_repositories(
        &self,
        login: &str,
        source: RepoSource,
        include_forks: bool,
    ) -> Result<Vec<RepoRef>> {
        let url = self.api_url(&source.endpoint(login));
        let entries = self
            .get_array(&url)
            .await
            .map_err(|e| anyhow::anyhow!("Cannot list repositories for {}: {}", login, e))?;

        if entries.is_empty() {
            anyhow::bail!("No repositories returned for {}", login);
        }

        let mut repositories = Vec::with_capacity(entries.len());
        for entry in entries {
            let repo: RepoRef = serde_json::from_value(entry)?;
            if repo.fork && !include_forks {
                continue;
            }
            repositories.push(repo);
        }

        Ok(repositories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_endpoint() {
        assert_eq!(
            RepoSource::Owned.endpoint("octocat"),
            "users/octocat/repos"
        );
    }

    #[test]
    fn test_starred_endpoint() {
        assert_eq!(
            RepoSource::Starred.endpoint("octocat"),
            "users/octocat/starred"
        );
    }

    #[test]
    fn test_repo_ref_deserializes_listing_entry() {
        let entry = serde_json::json!({
            "name": "hello-world",
            "url": "https://api.github.com/repos/octocat/hello-world",
            "clone_url": "https://github.com/octocat/hello-world.git",
            "fork": false,
            "stargazers_count": 3
        });
        let repo: RepoRef = serde_json::from_value(entry).unwrap();
        assert_eq!(repo.name, "hello-world");
        assert_eq!(
            repo.api_url,
            "https://api.github.com/repos/octocat/hello-world"
        );
        assert_eq!(repo.clone_url, "https://github.com/octocat/hello-world.git");
        assert!(!repo.fork);
    }

    #[test]
    fn test_repo_ref_fork_defaults_to_false() {
        let entry = serde_json::json!({
            "name": "r",
            "url": "https://api.github.com/repos/o/r",
            "clone_url": "https://github.com/o/r.git"
        });
        let repo: RepoRef = serde_json::from_value(entry).unwrap();
        assert!(!repo.fork);
    }
}
