//! Resolved document types.

use docsjs_renderer::Heading;
use serde::Serialize;

use crate::frontmatter::{BlogFrontmatter, Frontmatter};

/// A compiled content file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    pub frontmatter: Frontmatter,
    /// Compiled body.
    pub html: String,
    /// Headings of the body in document order.
    pub headings: Vec<Heading>,
}

/// Immediate subdirectory of a documentation directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChildSummary {
    pub title: String,
    pub description: String,
    /// Absolute page path (`/docs/{name}/{path}/{child}`).
    pub href: String,
}

/// Blog post listing entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlogSummary {
    #[serde(flatten)]
    pub frontmatter: BlogFrontmatter,
    /// File stem of the post.
    pub slug: String,
}

/// Error returned when a document cannot be served.
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    /// No content file at this path, or it cannot be read.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The content file is not valid text.
    #[error("Cannot parse {path}: {message}")]
    Parse { path: String, message: String },

    /// The body failed to compile.
    #[error("Cannot compile {path}: {source}")]
    Compile {
        path: String,
        #[source]
        source: docsjs_renderer::CompileError,
    },

    /// Storage failure other than a missing file.
    #[error(transparent)]
    Storage(#[from] docsjs_storage::StorageError),
}

impl DocsError {
    /// Whether the error should be presented as a missing page.
    ///
    /// Everything except backend failures is.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

#[cfg(test)]
mod tests {
    use docsjs_renderer::CompileError;
    use docsjs_storage::{StorageError, StorageErrorKind};

    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(DocsError::NotFound("a".to_owned()).is_not_found());
        assert!(
            DocsError::Compile {
                path: "a".to_owned(),
                source: CompileError::UnexpectedClose {
                    name: "Note".to_owned(),
                    line: 1,
                },
            }
            .is_not_found()
        );
        assert!(!DocsError::Storage(StorageError::new(StorageErrorKind::Other)).is_not_found());
    }

    #[test]
    fn test_blog_summary_is_flat() {
        let summary = BlogSummary {
            frontmatter: BlogFrontmatter {
                title: "Hola".to_owned(),
                ..BlogFrontmatter::default()
            },
            slug: "hola".to_owned(),
        };
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["title"], "Hola");
        assert_eq!(json["slug"], "hola");
        assert!(json.get("frontmatter").is_none());
    }
}
