use std::sync::{Arc, RwLock};

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategorySummaryDto;
use crate::features::search::dtos::SearchResultDto;
use crate::features::search::services::keyword_index::KeywordIndex;
use crate::features::search::services::match_engine;
use crate::shared::constants::{MAX_QUERY_LENGTH, MIN_QUERY_LENGTH};

/// Shared handle to the current keyword index snapshot.
///
/// Readers clone the inner `Arc` under a short read lock; rebuilds construct
/// a whole new index and swap the reference, so a reader never observes a
/// partially built index. `None` until the first successful build.
pub struct SharedKeywordIndex {
    inner: RwLock<Option<Arc<KeywordIndex>>>,
}

impl SharedKeywordIndex {
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Publish a freshly built snapshot, replacing any previous one
    pub fn store(&self, index: KeywordIndex) {
        let mut guard = self.inner.write().expect("keyword index lock poisoned");
        *guard = Some(Arc::new(index));
    }

    pub fn load(&self) -> Option<Arc<KeywordIndex>> {
        self.inner
            .read()
            .expect("keyword index lock poisoned")
            .clone()
    }
}

/// Service for the search boundary: validates input, delegates to the match
/// engine over the current snapshot, and shapes the response
pub struct SearchService {
    index: Arc<SharedKeywordIndex>,
}

impl SearchService {
    pub fn new(index: Arc<SharedKeywordIndex>) -> Self {
        Self { index }
    }

    pub fn search(&self, raw_query: &str) -> Result<SearchResultDto> {
        let trimmed = raw_query.trim();
        if trimmed.chars().count() < MIN_QUERY_LENGTH {
            return Err(AppError::InvalidQuery(format!(
                "Query must be at least {} characters",
                MIN_QUERY_LENGTH
            )));
        }
        if raw_query.chars().count() > MAX_QUERY_LENGTH {
            return Err(AppError::InvalidQuery(format!(
                "Query must not exceed {} characters",
                MAX_QUERY_LENGTH
            )));
        }

        let index = self.index.load().ok_or(AppError::IndexUnavailable)?;

        let categories: Vec<CategorySummaryDto> = match_engine::search(&index, raw_query)
            .iter()
            .map(|scored| CategorySummaryDto::from(scored.category.as_ref()))
            .collect();

        let total = categories.len() as i64;
        Ok(SearchResultDto {
            categories,
            query: trimmed.to_string(),
            total,
        })
    }
}
