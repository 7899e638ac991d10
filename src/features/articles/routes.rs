use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::articles::handlers;
use crate::features::articles::services::ArticleService;

/// Create routes for the articles feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<ArticleService>) -> Router {
    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/{slug}", get(handlers::get_article))
        .with_state(service)
}
