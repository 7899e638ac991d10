//! Educational articles.
//!
//! Static markdown content served read-only; only published articles are
//! visible.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ArticleService;
