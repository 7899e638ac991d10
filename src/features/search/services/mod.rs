mod index_loader;
pub mod keyword_index;
pub mod match_engine;
mod search_service;

pub use index_loader::IndexLoader;
pub use keyword_index::KeywordIndex;
pub use search_service::{SearchService, SharedKeywordIndex};
