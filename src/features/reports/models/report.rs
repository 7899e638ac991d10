use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a user-submitted report
///
/// `status` is one of `pending`, `reviewed` or `verified`; rows are always
/// inserted `pending` and only the out-of-scope moderation process moves them
/// forward.
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: Uuid,
    pub product_name: String,
    pub brand: Option<String>,
    pub upc: Option<String>,
    pub store_name: Option<String>,
    pub store_location: Option<String>,
    pub description: String,
    pub photo_url: Option<String>,
    pub email: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
