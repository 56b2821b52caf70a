//! Documents API endpoints.
//!
//! Serves compiled documents with their headings, pagination links and
//! canonical URL, plus the child listing used by `<Outlet>`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use docsjs_routes::{BreadcrumbItem, Page};
use docsjs_site::{ChildSummary, Frontmatter, Heading, canonical_url};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/docs/{name}/{slug}.
#[derive(Serialize)]
struct DocumentResponse<'a> {
    frontmatter: &'a Frontmatter,
    /// Compiled HTML body.
    content: &'a str,
    headings: &'a [Heading],
    /// Ancestor chain from the route tree, outermost first.
    breadcrumbs: Vec<BreadcrumbItem>,
    prev: Option<PageLink>,
    next: Option<PageLink>,
    canonical: String,
}

/// Pagination link with an absolute site path.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct PageLink {
    title: String,
    href: String,
}

impl PageLink {
    fn new(name: &str, page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            href: format!("/docs/{name}{}", page.href),
        }
    }
}

/// Query of GET /api/docs/children.
#[derive(Deserialize)]
pub(crate) struct ChildrenQuery {
    name: Option<String>,
    path: Option<String>,
}

/// Handle GET /api/docs/{name} (collection index page).
pub(crate) async fn get_collection_root(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_document_impl(&state, &name, "", &headers)
}

/// Handle GET /api/docs/{name}/{*slug}.
pub(crate) async fn get_document(
    Path((name, slug)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_document_impl(&state, &name, &slug, &headers)
}

/// Handle GET /api/docs/children?name=&path=.
pub(crate) async fn get_children(
    Query(query): Query<ChildrenQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ChildSummary>>, ServerError> {
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    let (Some(name), Some(path)) = (non_empty(query.name), non_empty(query.path)) else {
        return Err(ServerError::MissingParameters);
    };
    Ok(Json(state.site.children(&name, &path)))
}

fn get_document_impl(
    state: &AppState,
    name: &str,
    slug: &str,
    headers: &HeaderMap,
) -> Result<Response, ServerError> {
    let slug = slug.trim_matches('/');
    let document = state.site.resolve(name, slug)?;

    let etag = compute_etag(&state.version, &document.html);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let adjacent = state.routes.adjacent_in(name, slug);
    let response = DocumentResponse {
        frontmatter: &document.frontmatter,
        content: &document.html,
        headings: &document.headings,
        breadcrumbs: state.routes.breadcrumbs(name, slug),
        prev: adjacent.prev.map(|page| PageLink::new(name, page)),
        next: adjacent.next.map(|page| PageLink::new(name, page)),
        canonical: canonical_url(&state.base_url, name, slug),
    };

    Ok((
        [
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "public, max-age=60".to_owned()),
        ],
        Json(response),
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
