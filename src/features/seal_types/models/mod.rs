mod seal_type;

pub use seal_type::SealType;
