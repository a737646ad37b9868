pub mod storage_service;

pub use storage_service::StorageService;
