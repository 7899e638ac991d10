mod index_refresher;

pub use index_refresher::IndexRefresher;
