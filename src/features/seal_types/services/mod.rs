mod seal_type_service;

pub use seal_type_service::SealTypeService;
