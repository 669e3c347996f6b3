//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::ports::{FileSystem, FsResult};

/// Write content to a file atomically
///
/// Writes a temp file next to `path` and renames it over the destination, so
/// readers never observe a partially written file. Parent directories are
/// created first.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Whether both paths name the same existing file, through links and `..`
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<u64> {
        if is_same_file(from, to) {
            return fs::metadata(from).map(|m| m.len());
        }
        fs::copy(from, to)
    }

    fn ensure_file(&self, path: &Path) -> FsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|_| ())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path)
    }
}
