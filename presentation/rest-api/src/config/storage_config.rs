use std::env;
use std::path::PathBuf;

/// Where receipt photos and extraction results live on disk.
///
/// Environment variables:
/// - IMAGES_DIR: receipt photo directory (default: "data/images")
/// - EXTRACTION_CACHE_DIR: extraction cache directory (default: "data/extractions")
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub images_dir: PathBuf,
    pub extraction_cache_dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            images_dir: env::var("IMAGES_DIR")
                .unwrap_or_else(|_| "data/images".to_string())
                .into(),
            extraction_cache_dir: env::var("EXTRACTION_CACHE_DIR")
                .unwrap_or_else(|_| "data/extractions".to_string())
                .into(),
        }
    }
}
