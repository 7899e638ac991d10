use utoipa::{Modify, OpenApi};

use crate::features::articles::{dtos as articles_dtos, handlers as articles_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};
use crate::features::seal_types::{dtos as seal_types_dtos, handlers as seal_types_handlers};
use crate::features::search::{dtos as search_dtos, handlers as search_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Search
        search_handlers::search_categories,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Seal types
        seal_types_handlers::list_seal_types,
        // Reports
        reports_handlers::create_report,
        // Articles
        articles_handlers::list_articles,
        articles_handlers::get_article,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Search
            search_dtos::SearchResultDto,
            ApiResponse<search_dtos::SearchResultDto>,
            // Categories
            categories_dtos::CategorySummaryDto,
            categories_dtos::CategoryDetailDto,
            ApiResponse<Vec<categories_dtos::CategorySummaryDto>>,
            ApiResponse<categories_dtos::CategoryDetailDto>,
            // Seal types
            seal_types_dtos::SealTypeResponseDto,
            ApiResponse<Vec<seal_types_dtos::SealTypeResponseDto>>,
            // Reports
            reports_dtos::CreateReportDto,
            reports_dtos::ReportResponseDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            // Articles
            articles_dtos::ArticleSummaryDto,
            articles_dtos::ArticleDetailDto,
            ApiResponse<Vec<articles_dtos::ArticleSummaryDto>>,
            ApiResponse<articles_dtos::ArticleDetailDto>,
        )
    ),
    tags(
        (name = "search", description = "Keyword-to-category search"),
        (name = "categories", description = "Product categories and their seal requirements"),
        (name = "seal-types", description = "Tamper-evident seal reference vocabulary"),
        (name = "reports", description = "User-submitted problem reports"),
        (name = "articles", description = "Educational articles"),
    ),
    info(
        title = "SealCheck API",
        version = "0.1.0",
        description = "API for checking tamper-evident safety seal requirements",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
