//! Navigation API endpoints.
//!
//! Sidebar trees, pre-renderable paths and the technologies catalog.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use docsjs_routes::{NavItem, StaticPath, Technology, technologies};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/navigation/{name}.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    name: String,
    items: Vec<NavItem>,
}

/// Handle GET /api/navigation/{name}.
pub(crate) async fn get_navigation(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ServerError> {
    if !state.routes.has_collection(&name) {
        return Err(ServerError::UnknownCollection(name));
    }
    let items = state.routes.navigation(&name);
    Ok(Json(NavigationResponse { name, items }))
}

/// Handle GET /api/routes.
pub(crate) async fn get_routes(State(state): State<Arc<AppState>>) -> Json<Vec<StaticPath>> {
    Json(state.routes.static_paths())
}

/// Handle GET /api/technologies.
pub(crate) async fn get_technologies() -> Json<&'static [Technology]> {
    Json(technologies())
}
