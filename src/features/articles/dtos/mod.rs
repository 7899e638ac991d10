mod article_dto;

pub use article_dto::{ArticleDetailDto, ArticleSummaryDto};
