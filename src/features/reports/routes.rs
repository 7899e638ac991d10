use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// Note: This feature is public (no authentication required) as it's the
/// consumer-facing intake form.
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports", post(handlers::create_report))
        .with_state(service)
}
