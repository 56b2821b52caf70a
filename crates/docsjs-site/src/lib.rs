//! Document resolution, caching and listings for docsjs.
//!
//! This crate provides:
//! - [`Site`]: resolves `(name, slug)` pairs to compiled [`Document`]s,
//!   lists child pages and serves blog posts
//! - [`DocumentCache`]: injectable cache keyed by content file path
//! - Frontmatter parsing for documentation pages and blog posts
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use docsjs_site::{MemoryCache, Site};
//! use docsjs_storage::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("contents")));
//! let site = Site::new(storage, Arc::new(MemoryCache::new()));
//!
//! if let Some(doc) = site.document("zustand", "empezando/introduccion") {
//!     println!("{}: {} headings", doc.frontmatter.title, doc.headings.len());
//! }
//! ```

mod cache;
mod document;
mod frontmatter;
mod site;

pub use cache::{DocumentCache, MemoryCache, NullCache};
pub use document::{BlogSummary, ChildSummary, DocsError, Document};
pub use frontmatter::{
    Author, BlogFrontmatter, Frontmatter, parse_frontmatter, parse_header, split_frontmatter,
};
pub use site::{Site, blog_path, canonical_url, document_path};

// Re-export Heading from docsjs-renderer for convenience
pub use docsjs_renderer::Heading;
