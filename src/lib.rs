//! dev-notes-mcp library
//!
//! Markdown note store for AI agent note-taking.
//!
//! # Modules
//!
//! - `core`: Note store operations (slugs, paths, filesystem store)

pub mod core;

// Re-exports for convenience
pub use core::paths::NotesPaths;
pub use core::slug::{display_title, slugify};
pub use core::store::{NoteEntry, NoteStore, StoreError};
