pub mod extraction_cache;
pub mod image_store;

pub use extraction_cache::ExtractionCacheFs;
pub use image_store::ImageStoreFs;
