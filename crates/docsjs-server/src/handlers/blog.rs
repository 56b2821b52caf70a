//! Blog API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use docsjs_site::{BlogFrontmatter, BlogSummary, Heading};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/blog/{slug}.
#[derive(Serialize)]
pub(crate) struct BlogPostResponse {
    slug: String,
    frontmatter: BlogFrontmatter,
    content: String,
    headings: Vec<Heading>,
}

/// Handle GET /api/blog.
pub(crate) async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<BlogSummary>> {
    Json(state.site.blog_posts())
}

/// Handle GET /api/blog/{slug}.
pub(crate) async fn get_post(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<BlogPostResponse>, ServerError> {
    let document = state.site.blog_post(&slug)?;
    Ok(Json(BlogPostResponse {
        slug,
        frontmatter: document.frontmatter.to_blog(),
        content: document.html.clone(),
        headings: document.headings.clone(),
    }))
}
