//! Product category feature.
//!
//! Categories carry the regulatory tamper-evident-packaging metadata for one
//! product classification. They form a two-level tree via
//! `parent_category_id` and are read-only at serving time; the data set is
//! maintained by an offline preparation process.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/categories` | No | List categories (optional parent/seal filters) |
//! | GET | `/api/categories/{slug}` | No | Full category detail by slug |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
