pub mod articles;
pub mod categories;
pub mod reports;
pub mod seal_types;
pub mod search;
