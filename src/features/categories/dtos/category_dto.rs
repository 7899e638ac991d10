use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::categories::models::Category;

/// Lightweight category projection used in lists and search results
///
/// Full regulation text and seal detail are only exposed on the detail DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategorySummaryDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub requires_seal: bool,
    pub regulation_code: Option<String>,
    pub parent_category_id: Option<Uuid>,
}

impl From<&Category> for CategorySummaryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
            slug: c.slug.clone(),
            description: c.description.clone(),
            requires_seal: c.requires_seal,
            regulation_code: c.regulation_code.clone(),
            parent_category_id: c.parent_category_id,
        }
    }
}

impl From<Category> for CategorySummaryDto {
    fn from(c: Category) -> Self {
        Self::from(&c)
    }
}

/// Full category detail: regulation info, seal guidance, keywords, relations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDetailDto {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub requires_seal: bool,
    pub regulation_code: Option<String>,
    pub regulation_name: Option<String>,
    pub regulation_summary: Option<String>,
    pub seal_types: Vec<String>,
    pub seal_description: Option<String>,
    pub what_to_do: Option<String>,
    pub keywords: Vec<String>,
    pub children: Vec<CategorySummaryDto>,
    pub parent: Option<CategorySummaryDto>,
    pub parent_category_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryDetailDto {
    pub fn from_parts(
        category: Category,
        keywords: Vec<String>,
        children: Vec<Category>,
        parent: Option<Category>,
    ) -> Self {
        let seal_types = category.seal_type_slugs();
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            requires_seal: category.requires_seal,
            regulation_code: category.regulation_code,
            regulation_name: category.regulation_name,
            regulation_summary: category.regulation_summary,
            seal_types,
            seal_description: category.seal_description,
            what_to_do: category.what_to_do,
            keywords,
            children: children.iter().map(CategorySummaryDto::from).collect(),
            parent: parent.as_ref().map(CategorySummaryDto::from),
            parent_category_id: category.parent_category_id,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
