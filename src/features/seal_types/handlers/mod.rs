mod seal_type_handler;

pub use seal_type_handler::*;
