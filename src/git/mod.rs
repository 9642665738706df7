//! Git operations using the system git command for maximum compatibility
//!
//! ## Sub-modules
//!
//! - [`clone`]: Repository cloning and authenticated URL rewriting
//!   - `clone_repository()` - Clone a repository into a destination directory
//!   - `authenticated_clone_url()` - Embed credentials into an HTTPS URL
//!
//! - [`common`]: Shared utilities and helpers
//!   - `Logger` - Consistent per-repository logging

pub mod clone;
pub mod common;

// Re-export all public functions to keep call sites short
pub use clone::{CloneOptions, authenticated_clone_url, build_clone_args, clone_repository};
pub use common::Logger;
