use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::articles::dtos::{ArticleDetailDto, ArticleSummaryDto};
use crate::features::articles::models::Article;

const ARTICLE_COLUMNS: &str =
    "id, title, slug, content, meta_description, published, created_at, updated_at";

/// Service for article read operations
pub struct ArticleService {
    pool: PgPool,
}

impl ArticleService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List published articles, newest first
    pub async fn list(&self) -> Result<Vec<ArticleSummaryDto>> {
        let articles = sqlx::query_as::<_, Article>(&format!(
            "SELECT {ARTICLE_COLUMNS}
             FROM articles
             WHERE published = TRUE
             ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list articles: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(articles.into_iter().map(|a| a.into()).collect())
    }

    /// Get a published article by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<ArticleDetailDto> {
        let article = sqlx::query_as::<_, Article>(&format!(
            "SELECT {ARTICLE_COLUMNS}
             FROM articles
             WHERE slug = $1 AND published = TRUE"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get article by slug: {:?}", e);
            AppError::Database(e)
        })?;

        article
            .map(|a| a.into())
            .ok_or_else(|| AppError::NotFound(format!("Article '{}' not found", slug)))
    }
}
