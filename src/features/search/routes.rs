use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::search::handlers;
use crate::features::search::services::SearchService;

/// Create routes for the search feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<SearchService>) -> Router {
    Router::new()
        .route("/api/search", get(handlers::search_categories))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::{Category, Keyword};
    use crate::features::search::dtos::SearchResultDto;
    use crate::features::search::services::{KeywordIndex, SharedKeywordIndex};
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use uuid::Uuid;

    fn seeded_category(name: &str, keywords: &[&str]) -> (Category, Vec<Keyword>) {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: None,
            requires_seal: true,
            regulation_code: Some("21 CFR 211.132".to_string()),
            regulation_name: None,
            regulation_summary: None,
            seal_types: None,
            seal_description: None,
            what_to_do: None,
            parent_category_id: None,
            created_at: now,
            updated_at: now,
        };
        let keywords = keywords
            .iter()
            .map(|k| Keyword {
                id: Uuid::new_v4(),
                category_id: category.id,
                keyword: k.to_string(),
            })
            .collect();
        (category, keywords)
    }

    fn server(shared: Arc<SharedKeywordIndex>) -> TestServer {
        let service = Arc::new(SearchService::new(shared));
        TestServer::new(routes(service)).unwrap()
    }

    fn seeded_server() -> TestServer {
        let (category, keywords) = seeded_category("OTC Pain Relievers", &["tylenol", "advil"]);
        let shared = Arc::new(SharedKeywordIndex::empty());
        shared.store(KeywordIndex::build(vec![category], keywords).unwrap());
        server(shared)
    }

    #[tokio::test]
    async fn test_search_returns_ranked_matches() {
        let server = seeded_server();

        let response = server.get("/api/search").add_query_param("q", "tylenol").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: ApiResponse<SearchResultDto> = response.json();
        assert!(body.success);
        let result = body.data.unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.categories[0].name, "OTC Pain Relievers");
        assert!(result.categories[0].requires_seal);
    }

    #[tokio::test]
    async fn test_search_rejects_single_character_query() {
        let server = seeded_server();

        let response = server.get("/api/search").add_query_param("q", "a").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_accepts_two_character_query() {
        let server = seeded_server();

        let response = server.get("/api/search").add_query_param("q", "ab").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: ApiResponse<SearchResultDto> = response.json();
        assert_eq!(body.data.unwrap().total, 0);
    }

    #[tokio::test]
    async fn test_search_rejects_missing_query_param() {
        let server = seeded_server();

        let response = server.get("/api/search").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_no_match_is_empty_not_error() {
        let server = seeded_server();

        let response = server.get("/api/search").add_query_param("q", "xyzzyqux").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: ApiResponse<SearchResultDto> = response.json();
        let result = body.data.unwrap();
        assert_eq!(result.total, 0);
        assert!(result.categories.is_empty());
    }

    #[tokio::test]
    async fn test_search_unavailable_before_first_build() {
        let server = server(Arc::new(SharedKeywordIndex::empty()));

        let response = server.get("/api/search").add_query_param("q", "tylenol").await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
