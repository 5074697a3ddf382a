//! CLI support for module-sugar
//!
//! Provides programmatic access to the `sugar` commands so build tools can
//! run the expansion step in process.

mod docs;
mod expand;
mod filters;

pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use expand::{Emit, ExpandOptions, execute_expand};
pub use filters::filters_overview;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Options file could not be loaded or compiled
    #[error("Config error: {0}")]
    Config(#[from] crate::ConfigError),
    /// Build unit JSON is malformed
    #[error("Invalid build unit: {0}")]
    Json(#[from] serde_json::Error),
    /// The pass itself failed
    #[error("Expansion error: {0}")]
    Expand(#[from] crate::ExpandError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// No input provided
    #[error("No input provided. Use --input or pipe a build unit to stdin.")]
    NoInput,
    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'sugar docs' to see available categories.")]
    UnknownCategory(String),
}
