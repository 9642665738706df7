//! GitHub API client implementation
//!
//! This module provides the main `GitHubClient` struct which serves as the
//! entry point for all GitHub API operations. The client encapsulates the
//! HTTP client, the token, and the API base URL, so the request configuration
//! is fixed at construction time and shared by every call.

use crate::constants::github::{ACCEPT_JSON, API_BASE, DEFAULT_USER_AGENT, PAGE_SIZE};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

/// GitHub API client for making authenticated requests
///
/// The client is immutable once constructed: the token and base URL are set
/// at creation and every request derives its headers from them. Repository
/// enumeration and detail fetches are implemented in sibling modules as
/// additional `impl` blocks on this type.
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) token: Option<String>,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client with an optional token
    ///
    /// If no token is provided, falls back to the `GITHUB_TOKEN` environment
    /// variable. Without a token requests are unauthenticated and subject to
    /// GitHub's anonymous rate limits.
    pub fn new(token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.or_else(|| std::env::var("GITHUB_TOKEN").ok()),
            base_url: API_BASE.to_string(),
        }
    }

    /// Create a client pointed at a different API base URL (used by tests)
    pub fn with_base_url(token: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token,
            base_url: base_url.into(),
        }
    }

    /// Check if the client has a token configured
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Get the authentication token (if available)
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build the absolute URL for an API path under the configured base
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .get(url)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .header("Accept", ACCEPT_JSON);

        // The v3 API accepts the bare token without a scheme prefix
        if let Some(token) = &self.token {
            request = request.header("Authorization", token.clone());
        }

        request
    }

    /// Perform a single authenticated GET and parse the JSON body
    ///
    /// A 200 response yields the parsed body; any other status is an error
    /// carrying the status code and response text. No retries.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self
            .request(url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;

        if response.status().is_success() {
            let body: Value = response.json().await?;
            Ok(body)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!(
                "Request to {} failed ({}): {}",
                url,
                status,
                error_text
            ))
        }
    }

    /// Fetch a paginated array endpoint in full
    ///
    /// Requests `per_page=100` and walks `page=N` until a short or empty
    /// page. Endpoints that return a single page behave exactly as a single
    /// GET would.
    pub async fn get_array(&self, url: &str) -> Result<Vec<Value>> {
        let separator = if url.contains('?') { '&' } else { '?' };
        let mut entries = Vec::new();
        let mut page = 1;

        loop {
            let page_url = format!("{url}{separator}per_page={PAGE_SIZE}&page={page}");
            let body = self.get_json(&page_url).await?;
            let Value::Array(batch) = body else {
                anyhow::bail!("Expected a JSON array from {url}");
            };

            let len = batch.len();
            entries.extend(batch);

            if len < PAGE_SIZE {
                return Ok(entries);
            }
            page += 1;
        }
    }

    /// Download a repository snapshot from the zipball endpoint
    ///
    /// The zipball endpoint is fetched without the authorization header; it
    /// serves public repositories anonymously and redirects to a codeload
    /// host that does not expect the API token.
    pub async fn download_zipball(&self, repo_api_url: &str) -> Result<Vec<u8>> {
        let url = format!("{repo_api_url}/zipball");
        let response = self
            .client
            .get(&url)
            .header("User-Agent", DEFAULT_USER_AGENT)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;

        if response.status().is_success() {
            let body = response.bytes().await?;
            Ok(body.to_vec())
        } else {
            Err(anyhow::anyhow!(
                "Zipball download from {} failed ({})",
                url,
                response.status()
            ))
        }
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}
