//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::storage::{Entry, Storage, StorageError, StorageErrorKind, join};

const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores files in memory. Directories are implied by file paths and can also
/// be added empty with [`with_dir`](Self::with_dir). Listings are sorted by name.
///
/// # Example
///
/// ```ignore
/// use docsjs_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("zustand/empezando/index.mdx", "---\ntitle: Empezando\n---\n");
///
/// let content = storage.read("zustand/empezando/index.mdx").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: BTreeMap<String, String>,
    dirs: BTreeSet<String>,
    unreadable: HashSet<String>,
    reads: AtomicUsize,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with content. Parent directories are created implicitly.
    #[must_use]
    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        let path = join(&[path]);
        self.add_parents(&path);
        self.files.insert(path, content.into());
        self
    }

    /// Add an empty directory.
    #[must_use]
    pub fn with_dir(mut self, path: &str) -> Self {
        let path = join(&[path]);
        self.add_parents(&path);
        self.dirs.insert(path);
        self
    }

    /// Add a file that exists but fails to read with a permission error.
    #[must_use]
    pub fn with_unreadable(mut self, path: &str) -> Self {
        let path = join(&[path]);
        self.add_parents(&path);
        self.files.insert(path.clone(), String::new());
        self.unreadable.insert(path);
        self
    }

    /// Number of successful `read` calls so far.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn add_parents(&mut self, path: &str) {
        let mut current = String::new();
        let segments: Vec<&str> = path.split('/').collect();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            self.dirs.insert(current.clone());
        }
    }
}

impl Storage for MockStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        let key = join(&[path]);
        if self.unreadable.contains(&key) {
            return Err(StorageError::new(StorageErrorKind::PermissionDenied)
                .with_path(PathBuf::from(path))
                .with_backend(BACKEND));
        }
        let content = self
            .files
            .get(&key)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(content)
    }

    fn exists(&self, path: &str) -> bool {
        let key = join(&[path]);
        key.is_empty() || self.files.contains_key(&key) || self.dirs.contains(&key)
    }

    fn is_dir(&self, path: &str) -> bool {
        let key = join(&[path]);
        key.is_empty() || self.dirs.contains(&key)
    }

    fn list(&self, dir: &str) -> Result<Vec<Entry>, StorageError> {
        let key = join(&[dir]);
        if !self.is_dir(&key) {
            return Err(StorageError::not_found(dir).with_backend(BACKEND));
        }
        let prefix = if key.is_empty() {
            String::new()
        } else {
            format!("{key}/")
        };

        let direct_child = |path: &String| -> Option<String> {
            let rest = path.strip_prefix(&prefix)?;
            (!rest.is_empty() && !rest.contains('/')).then(|| rest.to_owned())
        };

        let mut entries: Vec<Entry> = self
            .dirs
            .iter()
            .filter_map(direct_child)
            .map(Entry::dir)
            .chain(self.files.keys().filter_map(direct_child).map(Entry::file))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
