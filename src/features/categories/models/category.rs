use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a product category
///
/// `seal_types` is a denormalized JSON list of seal-type slugs; the referenced
/// slugs are informational and are not required to exist in `seal_types`.
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub requires_seal: bool,
    pub regulation_code: Option<String>,
    pub regulation_name: Option<String>,
    pub regulation_summary: Option<String>,
    pub seal_types: Option<serde_json::Value>,
    pub seal_description: Option<String>,
    pub what_to_do: Option<String>,
    pub parent_category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Seal-type slug tags as a plain string list (empty when unset)
    pub fn seal_type_slugs(&self) -> Vec<String> {
        self.seal_types
            .as_ref()
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
