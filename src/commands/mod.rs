//! Command implementations for the gh-backup CLI
//!
//! Each terminal action is a type implementing the [`Command`] trait and
//! executed with a shared [`CommandContext`].

pub mod base;
pub mod clone;
pub mod download;
pub mod export;
pub mod validators;

pub use base::{Command, CommandContext};
pub use clone::CloneCommand;
pub use download::DownloadCommand;
pub use export::ExportCommand;
