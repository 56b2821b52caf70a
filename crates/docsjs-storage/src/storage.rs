//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for reading content files and listing
//! directories, along with [`StorageError`] for unified error handling across
//! backends.
//!
//! # Path Convention
//!
//! All path parameters are **content-relative paths**, not absolute file paths:
//! - `""` - content root
//! - `"zustand"` - collection directory
//! - `"zustand/empezando/index.mdx"` - document source
//!
//! Implementations map these to their internal storage format and must refuse
//! paths that escape the content root.

use std::path::PathBuf;

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Path escapes the content root or is otherwise malformed.
    InvalidPath,
    /// Content is not valid UTF-8.
    InvalidData,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create an invalid path error.
    #[must_use]
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::InvalidPath).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            // A path component that is a file, or a name the OS rejects,
            // names nothing that can exist.
            std::io::ErrorKind::NotFound
            | std::io::ErrorKind::NotADirectory
            | std::io::ErrorKind::IsADirectory
            | std::io::ErrorKind::InvalidFilename => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::InvalidData => StorageErrorKind::InvalidData,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// Whether this error means the resource is absent.
    ///
    /// Invalid paths count as absent: a request for `../etc` simply has no page.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            StorageErrorKind::NotFound | StorageErrorKind::InvalidPath
        )
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::InvalidData => "Invalid data",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Kind of a directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One entry of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Entry name (last path segment).
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    /// Create a file entry.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    #[must_use]
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    /// Check if the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Storage abstraction for reading site content.
///
/// Implementations must be safe to share between request handlers.
pub trait Storage: Send + Sync {
    /// Read a file as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file doesn't exist or can't be read.
    fn read(&self, path: &str) -> Result<String, StorageError>;

    /// Check if a file or directory exists at the given path.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, path: &str) -> bool;

    /// Check if the path is an existing directory.
    fn is_dir(&self, path: &str) -> bool;

    /// List immediate entries of a directory.
    ///
    /// Entry order is backend-defined; callers needing a stable order sort.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory doesn't exist or can't be read.
    fn list(&self, dir: &str) -> Result<Vec<Entry>, StorageError>;
}

/// Join content-relative path segments with `/`, skipping empty ones.
///
/// ```
/// use docsjs_storage::join;
///
/// assert_eq!(join(&["zustand", "", "empezando/", "index.mdx"]), "zustand/empezando/index.mdx");
/// ```
#[must_use]
pub fn join(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
