//! Application state.
//!
//! Shared state for all request handlers.

use docsjs_routes::RouteTable;
use docsjs_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Document resolver over the content tree.
    pub(crate) site: Site,
    /// Navigation trees and flattened pages.
    pub(crate) routes: RouteTable,
    /// Public origin for canonical URLs.
    pub(crate) base_url: String,
    /// Application version for ETags and the health endpoint.
    pub(crate) version: String,
}
