//! Keyword-to-category search feature.
//!
//! Resolves free-text consumer input ("tylenol", "eye drops") to a ranked set
//! of product categories. The whole feature is served from an immutable
//! in-memory snapshot (`KeywordIndex`) built from the category and keyword
//! tables; a background worker rebuilds the snapshot on an interval and swaps
//! it atomically, so request handling never touches the database.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/search?q=` | No | Ranked category matches for a query |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod workers;

pub use services::{IndexLoader, SearchService, SharedKeywordIndex};
pub use workers::IndexRefresher;
