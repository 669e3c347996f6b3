//! Generate Options

use std::path::PathBuf;

use crate::domain::value_objects::EntryMode;

/// Options for the generate use case
///
/// `source` and `target` are kept as the raw option values so that missing
/// or malformed input is reported by the use case itself.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Component to render (`--source`)
    pub source: Option<String>,
    /// HTML file to produce (`--target`)
    pub target: Option<String>,
    /// Directory relative paths are resolved against
    pub cwd: PathBuf,
    /// How the component reaches the bundler
    pub mode: EntryMode,
}

impl GenerateOptions {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            source: None,
            target: None,
            cwd: cwd.into(),
            mode: EntryMode::default(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_mode(mut self, mode: EntryMode) -> Self {
        self.mode = mode;
        self
    }
}
