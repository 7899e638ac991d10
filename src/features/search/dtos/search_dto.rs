use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::dtos::CategorySummaryDto;

/// Ranked search results plus query metadata
///
/// `total` always equals the length of `categories`; result sets are small
/// because the keyword vocabulary is curated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub categories: Vec<CategorySummaryDto>,
    pub query: String,
    pub total: i64,
}
