use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::articles::models::Article;

/// Lightweight article projection for listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            slug: a.slug,
            meta_description: a.meta_description,
            created_at: a.created_at,
        }
    }
}

/// Full article including the markdown body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub meta_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDetailDto {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            slug: a.slug,
            content: a.content,
            meta_description: a.meta_description,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
