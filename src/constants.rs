//! Central constants for the gh-backup application

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("gh-backup/", env!("CARGO_PKG_VERSION"));

    /// Accept header for the REST v3 JSON API
    pub const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

    /// Page size requested from paginated listing endpoints
    pub const PAGE_SIZE: usize = 100;
}
