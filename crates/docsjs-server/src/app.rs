//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/docs/children", get(handlers::docs::get_children))
        .route("/api/docs/{name}", get(handlers::docs::get_collection_root))
        .route("/api/docs/{name}/{*slug}", get(handlers::docs::get_document))
        .route(
            "/api/navigation/{name}",
            get(handlers::navigation::get_navigation),
        )
        .route("/api/routes", get(handlers::navigation::get_routes))
        .route(
            "/api/technologies",
            get(handlers::navigation::get_technologies),
        )
        .route("/api/blog", get(handlers::blog::list_posts))
        .route("/api/blog/{slug}", get(handlers::blog::get_post));

    Router::new()
        .merge(api_routes)
        .route("/health", get(handlers::health::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
