//! HTTP JSON API for the docsjs site.
//!
//! This crate serves compiled documents and navigation data to the
//! presentation layer using axum:
//! - `GET /api/docs/{name}/{*slug}`: document with headings, pagination and
//!   canonical URL
//! - `GET /api/docs/children?name=&path=`: child pages for `<Outlet>`
//! - `GET /api/navigation/{name}`, `/api/routes`, `/api/technologies`
//! - `GET /api/blog`, `/api/blog/{slug}`
//! - `GET /health`
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docsjs_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         content_dir: PathBuf::from("contents"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use docsjs_routes::RouteTable;
use docsjs_site::{DocumentCache, MemoryCache, NullCache, Site};
use docsjs_storage::FsStorage;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content root directory.
    pub content_dir: PathBuf,
    /// Route file replacing the built-in route trees.
    pub routes_file: Option<PathBuf>,
    /// Keep compiled documents for the life of the process.
    pub cache_enabled: bool,
    /// Public origin for canonical URLs.
    pub base_url: String,
    /// Application version (for ETags).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            content_dir: PathBuf::from("contents"),
            routes_file: None,
            cache_enabled: true,
            base_url: "https://www.docsjs.com".to_owned(),
            version: String::new(),
        }
    }
}

/// Load the route table: the configured route file, or the built-in trees.
///
/// # Errors
///
/// Returns an error if the route file cannot be read or parsed.
pub fn load_routes(routes_file: Option<&std::path::Path>) -> Result<RouteTable, docsjs_routes::RouteError> {
    match routes_file {
        Some(path) => RouteTable::load(path),
        None => Ok(RouteTable::builtin()),
    }
}

/// Build the document resolver for a content directory.
#[must_use]
pub fn create_site(content_dir: PathBuf, cache_enabled: bool) -> Site {
    let cache: Arc<dyn DocumentCache> = if cache_enabled {
        Arc::new(MemoryCache::new())
    } else {
        Arc::new(NullCache)
    };
    Site::new(Arc::new(FsStorage::new(content_dir)), cache)
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the route file is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let routes = load_routes(config.routes_file.as_deref())?;
    let site = create_site(config.content_dir.clone(), config.cache_enabled);

    let state = Arc::new(AppState {
        site,
        routes,
        base_url: config.base_url.clone(),
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        content_dir = %config.content_dir.display(),
        cache = config.cache_enabled,
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from docsjs config.
#[must_use]
pub fn server_config_from_config(config: &docsjs_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.docs_resolved.content_dir.clone(),
        routes_file: config.docs_resolved.routes_file.clone(),
        cache_enabled: config.docs_resolved.cache_enabled,
        base_url: config.site.base_url.clone(),
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let config = docsjs_config::Config::default();

        let server = server_config_from_config(&config, "1.2.3".to_owned());

        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 7979);
        assert_eq!(server.content_dir, config.docs_resolved.content_dir);
        assert!(server.cache_enabled);
        assert_eq!(server.base_url, "https://www.docsjs.com");
        assert_eq!(server.version, "1.2.3");
    }

    #[test]
    fn test_load_routes_defaults_to_builtin() {
        let routes = load_routes(None).unwrap();
        assert!(routes.has_collection("zustand"));
    }

    #[test]
    fn test_create_site_without_cache() {
        let site = create_site(PathBuf::from("/no/existe"), false);

        assert!(site.document("zustand", "").is_none());
        assert!(site.cache().is_empty());
    }
}
