use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryDetailDto, CategorySummaryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::SLUG_REGEX;

/// Query params for listing categories
#[derive(Debug, Deserialize)]
pub struct ListCategoriesQuery {
    /// Restrict to children of this category
    pub parent_id: Option<Uuid>,
    /// Filter by seal requirement
    pub requires_seal: Option<bool>,
}

/// List categories with optional filters
#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("parent_id" = Option<Uuid>, Query, description = "Filter by parent category ID"),
        ("requires_seal" = Option<bool>, Query, description = "Filter by seal requirement")
    ),
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategorySummaryDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
    Query(query): Query<ListCategoriesQuery>,
) -> Result<Json<ApiResponse<Vec<CategorySummaryDto>>>> {
    let categories = service.list(query.parent_id, query.requires_seal).await?;
    let total = categories.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(categories),
        None,
        Some(Meta { total }),
    )))
}

/// Get full category detail by slug
#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryDetailDto>),
        (status = 400, description = "Malformed slug"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<CategoryDetailDto>>> {
    if !SLUG_REGEX.is_match(&slug) {
        return Err(AppError::BadRequest(format!("Invalid slug: '{}'", slug)));
    }

    let category = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}
