//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the use case touch entry files, templates and the target without
//! depending on a concrete implementation.

use std::path::Path;

/// Result type for file system operations
pub type FsResult<T> = std::io::Result<T>;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - in-memory maps in unit tests
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file atomically, creating parent directories
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Copy file bytes, overwriting the destination
    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64>;

    /// Make sure a file exists at `path` (and its parents), leaving content intact
    fn ensure_file(&self, path: &Path) -> FsResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;
}
