//! Utility modules for common functionality

pub mod filesystem;
pub mod filters;
pub mod json;

// Re-export commonly used functions
pub use filesystem::ensure_directory_exists;
pub use filters::filter_by_names;
pub use json::to_ascii_pretty;
