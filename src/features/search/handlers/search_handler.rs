use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::core::error::Result;
use crate::features::search::dtos::SearchResultDto;
use crate::features::search::services::SearchService;
use crate::shared::types::{ApiResponse, Meta};

/// Query params for category search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search query (minimum 2 characters). Optional here so a missing
    /// parameter surfaces as the same validation failure as an empty one.
    pub q: Option<String>,
}

/// Search categories by keyword and name match
///
/// Results are ranked by relevance: exact keyword matches first, then exact
/// name matches, then substring matches, with seal-requiring categories
/// winning ties.
#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("q" = String, Query, description = "Search query (minimum 2 characters)")
    ),
    responses(
        (status = 200, description = "Ranked category matches", body = ApiResponse<SearchResultDto>),
        (status = 400, description = "Query missing, too short or too long"),
        (status = 503, description = "Search index not built yet, retry shortly")
    ),
    tag = "search"
)]
pub async fn search_categories(
    State(service): State<Arc<SearchService>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResultDto>>> {
    let result = service.search(query.q.as_deref().unwrap_or_default())?;
    let total = result.total;
    Ok(Json(ApiResponse::success(
        Some(result),
        None,
        Some(Meta { total }),
    )))
}
