use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryDetailDto, CategorySummaryDto};
use crate::features::categories::models::Category;

const CATEGORY_COLUMNS: &str = "id, name, slug, description, requires_seal, regulation_code, \
     regulation_name, regulation_summary, seal_types, seal_description, what_to_do, \
     parent_category_id, created_at, updated_at";

/// Service for category read operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List categories, optionally filtered by parent and seal requirement
    pub async fn list(
        &self,
        parent_id: Option<Uuid>,
        requires_seal: Option<bool>,
    ) -> Result<Vec<CategorySummaryDto>> {
        let categories = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS}
             FROM product_categories
             WHERE ($1::uuid IS NULL OR parent_category_id = $1)
               AND ($2::boolean IS NULL OR requires_seal = $2)
             ORDER BY name"
        ))
        .bind(parent_id)
        .bind(requires_seal)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get full category detail by slug, including keywords, children and parent
    pub async fn get_by_slug(&self, slug: &str) -> Result<CategoryDetailDto> {
        let category = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM product_categories WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by slug: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))?;

        let keywords = sqlx::query_scalar::<_, String>(
            "SELECT keyword FROM product_keywords WHERE category_id = $1 ORDER BY keyword",
        )
        .bind(category.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load keywords for category {}: {:?}", category.id, e);
            AppError::Database(e)
        })?;

        let children = sqlx::query_as::<_, Category>(&format!(
            "SELECT {CATEGORY_COLUMNS}
             FROM product_categories
             WHERE parent_category_id = $1
             ORDER BY name"
        ))
        .bind(category.id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load children for category {}: {:?}", category.id, e);
            AppError::Database(e)
        })?;

        let parent = match category.parent_category_id {
            Some(parent_id) => sqlx::query_as::<_, Category>(&format!(
                "SELECT {CATEGORY_COLUMNS} FROM product_categories WHERE id = $1"
            ))
            .bind(parent_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load parent for category {}: {:?}", category.id, e);
                AppError::Database(e)
            })?,
            None => None,
        };

        Ok(CategoryDetailDto::from_parts(
            category, keywords, children, parent,
        ))
    }
}
