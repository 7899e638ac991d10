use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{CreateReportDto, ReportResponseDto};
use crate::features::reports::models::Report;

/// Service for report intake
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new report; status always starts as `pending`
    pub async fn create(&self, dto: CreateReportDto) -> Result<ReportResponseDto> {
        let report = sqlx::query_as::<_, Report>(
            "INSERT INTO reports \
             (product_name, brand, upc, store_name, store_location, description, photo_url, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, product_name, brand, upc, store_name, store_location, description, \
             photo_url, email, status, created_at",
        )
        .bind(&dto.product_name)
        .bind(&dto.brand)
        .bind(&dto.upc)
        .bind(&dto.store_name)
        .bind(&dto.store_location)
        .bind(&dto.description)
        .bind(&dto.photo_url)
        .bind(&dto.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Report created: id={}, product={:?}",
            report.id,
            report.product_name
        );

        Ok(report.into())
    }
}
