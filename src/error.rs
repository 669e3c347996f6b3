//! Error types for skeleton-cli
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for skeleton-cli operations
pub type SkeletonResult<T> = Result<T, SkeletonError>;

/// Main error type for skeleton generation
#[derive(Error, Debug)]
pub enum SkeletonError {
    /// A `--source`/`--target` value is not a usable path
    #[error("option '{option}': {value} is not a path, eg: {example}, please verify!")]
    InvalidPath {
        option: &'static str,
        value: String,
        example: &'static str,
    },

    /// Entry template could not be read
    #[error("read {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Entry template lacks the import placeholder
    #[error("entry template {path} does not contain the placeholder '{token}'")]
    MissingPlaceholder { path: PathBuf, token: &'static str },

    /// Generated entry could not be written
    #[error("write {path}: {source}")]
    WriteEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A default workspace asset could not be written
    #[error("write default asset {path}: {source}")]
    MaterializeAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copy destination could not be created
    #[error("ensure {path}: {source}")]
    EnsureFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Component could not be copied into the workspace
    #[error("copy from {from} to {to} {source}")]
    CopySource {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stale artifact from a previous run could not be removed
    #[error("remove stale artifact {path}: {source}")]
    RemoveArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bundler failed; `output` is its own diagnostic text
    #[error("build failed\n{output}")]
    Build { output: String },

    /// The bundler reported success but produced no descriptor
    #[error("bundle descriptor not found at {path} after build")]
    BundleMissing { path: PathBuf },

    /// The rendering engine failed
    #[error("render failed: {message}")]
    Render { message: String },

    /// HTML template has no outlet to receive rendered markup
    #[error("content placeholder '{outlet}' not found in template {path}")]
    OutletMissing { path: PathBuf, outlet: &'static str },

    /// Final HTML could not be written
    #[error("generate skeleton {path}: {source}")]
    WriteTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is malformed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SkeletonError {
    /// File most closely associated with this error, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SkeletonError::ReadTemplate { path, .. }
            | SkeletonError::MissingPlaceholder { path, .. }
            | SkeletonError::WriteEntry { path, .. }
            | SkeletonError::MaterializeAsset { path, .. }
            | SkeletonError::EnsureFile { path, .. }
            | SkeletonError::RemoveArtifact { path, .. }
            | SkeletonError::BundleMissing { path }
            | SkeletonError::OutletMissing { path, .. }
            | SkeletonError::WriteTarget { path, .. } => Some(path),
            SkeletonError::CopySource { from, .. } => Some(from),
            SkeletonError::InvalidConfig { file, .. } => Some(file),
            SkeletonError::InvalidPath { .. }
            | SkeletonError::Build { .. }
            | SkeletonError::Render { .. }
            | SkeletonError::Io(_) => None,
        }
    }
}
