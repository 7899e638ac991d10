use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::features::articles::dtos::{ArticleDetailDto, ArticleSummaryDto};
use crate::features::articles::services::ArticleService;
use crate::shared::types::{ApiResponse, Meta};
use crate::shared::validation::SLUG_REGEX;

/// List all published articles
#[utoipa::path(
    get,
    path = "/api/articles",
    responses(
        (status = 200, description = "List of published articles", body = ApiResponse<Vec<ArticleSummaryDto>>),
    ),
    tag = "articles"
)]
pub async fn list_articles(
    State(service): State<Arc<ArticleService>>,
) -> Result<Json<ApiResponse<Vec<ArticleSummaryDto>>>> {
    let articles = service.list().await?;
    let total = articles.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(articles),
        None,
        Some(Meta { total }),
    )))
}

/// Get a published article by slug
#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Article found", body = ApiResponse<ArticleDetailDto>),
        (status = 400, description = "Malformed slug"),
        (status = 404, description = "Article not found")
    ),
    tag = "articles"
)]
pub async fn get_article(
    State(service): State<Arc<ArticleService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ArticleDetailDto>>> {
    if !SLUG_REGEX.is_match(&slug) {
        return Err(AppError::BadRequest(format!("Invalid slug: '{}'", slug)));
    }

    let article = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(Some(article), None, None)))
}
