use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::seal_types::dtos::SealTypeResponseDto;
use crate::features::seal_types::models::SealType;

/// Service for seal type reference data
pub struct SealTypeService {
    pool: PgPool,
}

impl SealTypeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all seal types, ordered by name
    pub async fn list(&self) -> Result<Vec<SealTypeResponseDto>> {
        let seal_types = sqlx::query_as::<_, SealType>(
            "SELECT id, name, slug, description, how_to_check, signs_of_tampering, \
             common_products, image_url
             FROM seal_types
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list seal types: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(seal_types.into_iter().map(|st| st.into()).collect())
    }
}
