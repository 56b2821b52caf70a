//! CLI error types.

use docsjs_config::ConfigError;
use docsjs_routes::RouteError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Routes(#[from] RouteError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0} document(s) failed to compile")]
    Check(usize),
}
