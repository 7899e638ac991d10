use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a search keyword owned by one category
///
/// Keyword text is not unique across categories; the same token may map to
/// several categories and ranking resolves the ambiguity.
#[derive(Debug, Clone, FromRow)]
pub struct Keyword {
    pub id: Uuid,
    pub category_id: Uuid,
    pub keyword: String,
}
