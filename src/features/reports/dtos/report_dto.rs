use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::Report;

/// Request DTO for submitting a problem report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateReportDto {
    #[validate(length(min = 1, max = 255, message = "Product name must be 1-255 characters"))]
    pub product_name: String,

    #[validate(length(max = 255, message = "Brand must not exceed 255 characters"))]
    pub brand: Option<String>,

    #[validate(length(max = 50, message = "UPC must not exceed 50 characters"))]
    pub upc: Option<String>,

    #[validate(length(max = 255, message = "Store name must not exceed 255 characters"))]
    pub store_name: Option<String>,

    #[validate(length(max = 500, message = "Store location must not exceed 500 characters"))]
    pub store_location: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(url(message = "Photo URL must be a valid URL"))]
    pub photo_url: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Response DTO returned after a report is created
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
    pub id: Uuid,
    pub product_name: String,
    pub brand: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            product_name: r.product_name,
            brand: r.brand,
            status: r.status,
            created_at: r.created_at,
        }
    }
}
