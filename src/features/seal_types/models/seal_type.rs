use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a seal type
#[derive(Debug, Clone, FromRow)]
pub struct SealType {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub how_to_check: Option<String>,
    pub signs_of_tampering: Option<serde_json::Value>,
    pub common_products: Option<serde_json::Value>,
    pub image_url: Option<String>,
}

impl SealType {
    pub fn signs_of_tampering_list(&self) -> Vec<String> {
        json_string_list(self.signs_of_tampering.as_ref())
    }

    pub fn common_products_list(&self) -> Vec<String> {
        json_string_list(self.common_products.as_ref())
    }
}

fn json_string_list(value: Option<&serde_json::Value>) -> Vec<String> {
    value
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
