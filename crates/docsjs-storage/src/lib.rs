//! Content storage abstraction for the docsjs site.
//!
//! This crate provides a [`Storage`] trait that decouples document resolution
//! from the place content lives. Paths passed to a storage are always relative
//! to the content root and use `/` as separator (e.g. `zustand/empezando/index.mdx`).
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `read()`, `exists()`, `is_dir()` and `list()` methods
//! - [`FsStorage`] implementation rooted at a directory on disk
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docsjs_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from("contents"));
//! let source = storage.read("zustand/empezando/introduccion/index.mdx")?;
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind, join};
