use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::seal_types::models::SealType;

/// Response DTO for a seal type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SealTypeResponseDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub how_to_check: Option<String>,
    pub signs_of_tampering: Vec<String>,
    pub common_products: Vec<String>,
    pub image_url: Option<String>,
}

impl From<SealType> for SealTypeResponseDto {
    fn from(st: SealType) -> Self {
        let signs_of_tampering = st.signs_of_tampering_list();
        let common_products = st.common_products_list();
        Self {
            id: st.id,
            name: st.name,
            slug: st.slug,
            description: st.description,
            how_to_check: st.how_to_check,
            signs_of_tampering,
            common_products,
            image_url: st.image_url,
        }
    }
}
