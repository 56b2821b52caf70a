//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docsjs_site::DocsError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No document at `{name}/{slug}`.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    /// No route tree for the collection.
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    /// A required query parameter is missing or empty.
    #[error("Missing parameters")]
    MissingParameters,

    /// Storage backend failure.
    #[error("Document error: {0}")]
    Docs(DocsError),
}

impl From<DocsError> for ServerError {
    fn from(e: DocsError) -> Self {
        match e {
            DocsError::NotFound(path) => Self::DocumentNotFound(path),
            DocsError::Parse { ref path, .. } | DocsError::Compile { ref path, .. } => {
                tracing::warn!(path = %path, error = %e, "Document cannot be served");
                Self::DocumentNotFound(path.clone())
            }
            DocsError::Storage(_) => Self::Docs(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::DocumentNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Document not found", "path": path}),
            ),
            Self::UnknownCollection(name) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Unknown collection", "name": name}),
            ),
            Self::MissingParameters => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Missing parameters"}),
            ),
            Self::Docs(e) => {
                tracing::error!(error = %e, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": "Internal server error"}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use docsjs_storage::{StorageError, StorageErrorKind};

    use super::*;

    #[test]
    fn test_docs_error_mapping() {
        assert!(matches!(
            ServerError::from(DocsError::NotFound("a/index.mdx".to_owned())),
            ServerError::DocumentNotFound(_)
        ));
        assert!(matches!(
            ServerError::from(DocsError::Parse {
                path: "a/index.mdx".to_owned(),
                message: "bad".to_owned(),
            }),
            ServerError::DocumentNotFound(_)
        ));
        assert!(matches!(
            ServerError::from(DocsError::Storage(StorageError::new(StorageErrorKind::Other))),
            ServerError::Docs(_)
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServerError::MissingParameters.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::UnknownCollection("x".to_owned())
                .into_response()
                .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::Docs(DocsError::Storage(StorageError::new(StorageErrorKind::Other)))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_storage_failure_body_hides_path() {
        let error = StorageError::new(StorageErrorKind::Other).with_path("zustand/index.mdx");
        let response = ServerError::Docs(DocsError::Storage(error)).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({"error": "Internal server error"}));
    }
}
