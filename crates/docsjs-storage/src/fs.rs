//! Filesystem storage backend.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::storage::{Entry, Storage, StorageError};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Storage rooted at a content directory on disk.
///
/// Relative paths containing `..`, absolute components, or drive prefixes are
/// rejected with [`StorageErrorKind::InvalidPath`](crate::StorageErrorKind::InvalidPath).
#[derive(Clone, Debug)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Create a storage rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a content-relative path to a path on disk.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let mut resolved = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => resolved.push(segment),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(StorageError::invalid_path(path).with_backend(BACKEND));
                }
            }
        }
        Ok(resolved)
    }
}

impl Storage for FsStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        let full = self.resolve(path)?;
        fs::read_to_string(&full)
            .map_err(|e| StorageError::io(e, Some(PathBuf::from(path))).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.exists())
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve(path).is_ok_and(|p| p.is_dir())
    }

    fn list(&self, dir: &str) -> Result<Vec<Entry>, StorageError> {
        let full = self.resolve(dir)?;
        let io_err = |e| StorageError::io(e, Some(PathBuf::from(dir))).with_backend(BACKEND);

        let mut entries = Vec::new();
        for entry in fs::read_dir(&full).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            match entry.file_type() {
                Ok(t) if t.is_dir() => entries.push(Entry::dir(name)),
                Ok(t) if t.is_file() => entries.push(Entry::file(name)),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(dir = %dir, entry = %name, error = %e, "Failed to stat entry");
                }
            }
        }
        Ok(entries)
    }
}
