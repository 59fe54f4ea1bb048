//! Axum route handlers for the article catalog HTTP API.

use crate::catalog::{Catalog, CatalogError};
use article_catalog_types::*;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;

pub struct AppState {
    pub catalog: Catalog,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            start_time: Instant::now(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/articles", post(create_article))
        .route("/articles/:article_id", get(get_article))
        .route("/tag/:tag_name/:date", get(search_by_tag))
        .route("/status", get(status))
        .with_state(state)
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match self {
            CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        log::debug!("[ROUTES] {} -> {}", self, status);
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// POST /articles
//
// Any body is accepted regardless of content type; one that does not decode
// as a draft creates an empty article.
pub async fn create_article(State(state): State<Arc<AppState>>, body: Bytes) -> Json<Article> {
    let draft = serde_json::from_slice::<ArticleDraft>(&body).unwrap_or_else(|e| {
        log::debug!("[ROUTES] Undecodable article body, using empty draft: {}", e);
        ArticleDraft::default()
    });
    Json(state.catalog.create_article(draft))
}

// GET /articles/:article_id
pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(article_id): Path<String>,
) -> Result<Json<Article>, CatalogError> {
    state.catalog.article_by_token(&article_id).map(Json)
}

// GET /tag/:tag_name/:date
pub async fn search_by_tag(
    State(state): State<Arc<AppState>>,
    Path((tag_name, date)): Path<(String, String)>,
) -> Result<Json<TagSearchResult>, CatalogError> {
    state
        .catalog
        .search_by_tag_and_date(&tag_name, &date)
        .map(Json)
}

// GET /status
pub async fn status(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    let stats = state.catalog.stats();
    Json(ServiceStatus {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        article_count: stats.article_count,
        tag_count: stats.tag_count,
    })
}
