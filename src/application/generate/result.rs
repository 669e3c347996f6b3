//! Generate Result

use std::path::PathBuf;

use crate::domain::value_objects::EntryMode;

/// Outcome of a successful generate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Absolute path of the written HTML
    pub target: PathBuf,
    /// Entry artifact prepared for the bundler
    pub entry_artifact: PathBuf,
    pub mode: EntryMode,
    /// Bundler statistics
    pub stats: String,
}
