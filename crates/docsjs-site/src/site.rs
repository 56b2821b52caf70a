//! Document resolution over a content tree.
//!
//! Content layout (paths relative to the storage root):
//!
//! ```text
//! {name}/{slug}/index.mdx    documentation page
//! blogs/{slug}.mdx           blog post
//! ```
//!
//! # Thread Safety
//!
//! [`Site`] is shared across request handlers behind an `Arc`. Resolution has
//! no side effects beyond the injected [`DocumentCache`].

use std::sync::Arc;

use docsjs_renderer::{Compiler, Heading};
use docsjs_storage::{Storage, StorageError, StorageErrorKind, join};

use crate::cache::DocumentCache;
use crate::document::{BlogSummary, ChildSummary, Document, DocsError};
use crate::frontmatter::{BlogFrontmatter, Frontmatter, parse_frontmatter, parse_header, split_frontmatter};

/// Directory holding blog posts, relative to the content root.
const BLOG_DIR: &str = "blogs";
/// File name of a documentation page inside its directory.
const INDEX_FILE: &str = "index.mdx";
const MDX_EXT: &str = ".mdx";

/// Content file path of the documentation page `slug` in collection `name`.
///
/// ```
/// use docsjs_site::document_path;
///
/// assert_eq!(
///     document_path("zustand", "empezando/introduccion"),
///     "zustand/empezando/introduccion/index.mdx"
/// );
/// assert_eq!(document_path("zustand", ""), "zustand/index.mdx");
/// ```
#[must_use]
pub fn document_path(name: &str, slug: &str) -> String {
    join(&[name, slug, INDEX_FILE])
}

/// Content file path of the blog post `slug`.
#[must_use]
pub fn blog_path(slug: &str) -> String {
    join(&[BLOG_DIR, &format!("{slug}{MDX_EXT}")])
}

/// Canonical URL of a documentation page. Empty parts are dropped.
///
/// ```
/// use docsjs_site::canonical_url;
///
/// assert_eq!(
///     canonical_url("https://www.docsjs.com/", "zustand", "guias/persist"),
///     "https://www.docsjs.com/docs/zustand/guias/persist"
/// );
/// assert_eq!(
///     canonical_url("https://www.docsjs.com", "zustand", ""),
///     "https://www.docsjs.com/docs/zustand"
/// );
/// ```
#[must_use]
pub fn canonical_url(base_url: &str, name: &str, slug: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = join(&["docs", name, slug]);
    format!("{base}/{path}")
}

/// Documentation and blog content, compiled on demand and cached.
pub struct Site {
    storage: Arc<dyn Storage>,
    cache: Arc<dyn DocumentCache>,
    compiler: Compiler,
}

impl Site {
    /// Create a site over `storage` using `cache` for compiled documents.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, cache: Arc<dyn DocumentCache>) -> Self {
        Self {
            storage,
            cache,
            compiler: Compiler::default(),
        }
    }

    /// Use a custom compiler (e.g. with a different component registry).
    #[must_use]
    pub fn with_compiler(mut self, compiler: Compiler) -> Self {
        self.compiler = compiler;
        self
    }

    /// The injected document cache.
    #[must_use]
    pub fn cache(&self) -> &Arc<dyn DocumentCache> {
        &self.cache
    }

    /// Resolve and compile a documentation page.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::NotFound`] for missing or unreadable files and
    /// [`DocsError::Compile`] when the body cannot be compiled.
    pub fn resolve(&self, name: &str, slug: &str) -> Result<Arc<Document>, DocsError> {
        self.load(&document_path(name, slug))
    }

    /// Documentation page, or `None` when it cannot be served.
    ///
    /// Failures are logged.
    #[must_use]
    pub fn document(&self, name: &str, slug: &str) -> Option<Arc<Document>> {
        self.resolve(name, slug)
            .inspect_err(|e| log_failure(e, "Error compiling document"))
            .ok()
    }

    /// Frontmatter of a documentation page.
    #[must_use]
    pub fn frontmatter(&self, name: &str, slug: &str) -> Option<Frontmatter> {
        self.document(name, slug).map(|doc| doc.frontmatter.clone())
    }

    /// Headings of a documentation page; empty when it cannot be served.
    #[must_use]
    pub fn headings(&self, name: &str, slug: &str) -> Vec<Heading> {
        self.document(name, slug)
            .map(|doc| doc.headings.clone())
            .unwrap_or_default()
    }

    /// Whether the content directory `name/path` exists.
    #[must_use]
    pub fn validate_path(&self, name: &str, path: &str) -> bool {
        self.storage.exists(&join(&[name, path]))
    }

    /// Immediate subdirectories of `name/path`, sorted by directory name.
    ///
    /// Only each child's frontmatter is read. Children without a readable
    /// index file are skipped with a warning.
    #[must_use]
    pub fn children(&self, name: &str, path: &str) -> Vec<ChildSummary> {
        let dir = join(&[name, path]);
        let mut entries = match self.storage.list(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir, error = %e, "Cannot list children");
                return Vec::new();
            }
        };
        entries.retain(|entry| entry.is_dir());
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        entries
            .into_iter()
            .filter_map(|entry| {
                let index = join(&[&dir, &entry.name, INDEX_FILE]);
                let raw = match self.storage.read(&index) {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::warn!(path = %index, error = %e, "Skipping child without readable index");
                        return None;
                    }
                };
                let (header, _) = split_frontmatter(&raw);
                let fm: Frontmatter = parse_header(header, &index);
                Some(ChildSummary {
                    title: fm.title,
                    description: fm.description,
                    href: format!("/{}", join(&["docs", &dir, &entry.name])),
                })
            })
            .collect()
    }

    /// File stems of all blog posts, sorted.
    #[must_use]
    pub fn blog_static_paths(&self) -> Vec<String> {
        let mut stems: Vec<String> = self
            .blog_files()
            .into_iter()
            .map(|file| file.trim_end_matches(MDX_EXT).to_owned())
            .collect();
        stems.sort();
        stems
    }

    /// Frontmatter and slug of every blog post, newest first.
    ///
    /// Posts with equal dates are ordered by slug. Unreadable posts are
    /// skipped with a warning.
    #[must_use]
    pub fn blog_posts(&self) -> Vec<BlogSummary> {
        let mut posts: Vec<BlogSummary> = self
            .blog_static_paths()
            .into_iter()
            .filter_map(|slug| {
                let frontmatter = self.blog_frontmatter(&slug)?;
                Some(BlogSummary { frontmatter, slug })
            })
            .collect();
        posts.sort_by(|a, b| {
            b.frontmatter
                .date
                .cmp(&a.frontmatter.date)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        posts
    }

    /// Resolve and compile a blog post.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn blog_post(&self, slug: &str) -> Result<Arc<Document>, DocsError> {
        self.load(&blog_path(slug))
    }

    /// Frontmatter of a blog post, read without compiling the body.
    #[must_use]
    pub fn blog_frontmatter(&self, slug: &str) -> Option<BlogFrontmatter> {
        let path = blog_path(slug);
        match self.storage.read(&path) {
            Ok(raw) => Some(parse_frontmatter(&raw, &path).0),
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Error getting blog frontmatter");
                None
            }
        }
    }

    /// `.mdx` file names in the blog directory.
    fn blog_files(&self) -> Vec<String> {
        match self.storage.list(BLOG_DIR) {
            Ok(entries) => entries
                .into_iter()
                .filter(|entry| !entry.is_dir() && entry.name.ends_with(MDX_EXT))
                .map(|entry| entry.name)
                .collect(),
            Err(e) => {
                tracing::warn!(path = BLOG_DIR, error = %e, "Cannot list blog posts");
                Vec::new()
            }
        }
    }

    /// Cache lookup, then read, split, extract headings and compile.
    fn load(&self, path: &str) -> Result<Arc<Document>, DocsError> {
        if let Some(document) = self.cache.get(path) {
            tracing::debug!(path = %path, "Document cache hit");
            return Ok(document);
        }
        tracing::debug!(path = %path, "Document cache miss");

        let raw = self.storage.read(path).map_err(|e| storage_error(e, path))?;
        let (frontmatter, body) = parse_frontmatter::<Frontmatter>(&raw, path);
        let headings = self.compiler.headings(body);
        let compiled = self.compiler.compile(body).map_err(|source| DocsError::Compile {
            path: path.to_owned(),
            source,
        })?;

        let document = Arc::new(Document {
            frontmatter,
            html: compiled.html,
            headings,
        });
        self.cache.insert(path, Arc::clone(&document));
        Ok(document)
    }
}

fn storage_error(e: StorageError, path: &str) -> DocsError {
    match e.kind {
        StorageErrorKind::NotFound
        | StorageErrorKind::InvalidPath
        | StorageErrorKind::PermissionDenied => DocsError::NotFound(path.to_owned()),
        StorageErrorKind::InvalidData => DocsError::Parse {
            path: path.to_owned(),
            message: e.to_string(),
        },
        _ => DocsError::Storage(e),
    }
}

fn log_failure(e: &DocsError, message: &str) {
    match e {
        DocsError::NotFound(path) => tracing::debug!(path = %path, "{message}: not found"),
        _ => tracing::warn!(error = %e, "{message}"),
    }
}
