/// Minimum accepted search query length, in characters, after trimming
pub const MIN_QUERY_LENGTH: usize = 2;

/// Queries longer than this (before normalization) are rejected outright
pub const MAX_QUERY_LENGTH: usize = 200;
