use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::seal_types::handlers;
use crate::features::seal_types::services::SealTypeService;

/// Create routes for the seal types feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<SealTypeService>) -> Router {
    Router::new()
        .route("/api/seal-types", get(handlers::list_seal_types))
        .with_state(service)
}
