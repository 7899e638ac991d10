use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, Keyword};
use crate::features::search::services::keyword_index::KeywordIndex;

/// Loads the full category and keyword data set and builds an index snapshot
pub struct IndexLoader {
    pool: PgPool,
}

impl IndexLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn load(&self) -> Result<KeywordIndex> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, slug, description, requires_seal, regulation_code, \
             regulation_name, regulation_summary, seal_types, seal_description, what_to_do, \
             parent_category_id, created_at, updated_at
             FROM product_categories",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load categories for index build: {:?}", e);
            AppError::Database(e)
        })?;

        let keywords = sqlx::query_as::<_, Keyword>(
            "SELECT id, category_id, keyword FROM product_keywords",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load keywords for index build: {:?}", e);
            AppError::Database(e)
        })?;

        KeywordIndex::build(categories, keywords).map_err(|e| {
            tracing::error!("Keyword index build rejected a record: {}", e);
            AppError::Internal(format!("Keyword index build failed: {}", e))
        })
    }
}
