use std::path::{Path, PathBuf};

use async_trait::async_trait;
use business::domain::errors::RepositoryError;
use business::domain::extraction::cache::ExtractionCache;
use business::domain::extraction::model::{ImageDigest, ReceiptExtraction};
use tokio::fs;

const RAW_RESPONSES_DIR: &str = "texts";

/// Extraction results stored as `receipt_<digest>.json`, plus the raw model
/// text of every attempt under `texts/`.
pub struct ExtractionCacheFs {
    root: PathBuf,
}

impl ExtractionCacheFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, digest: &ImageDigest) -> PathBuf {
        self.root.join(format!("receipt_{}.json", digest))
    }

    fn raw_response_path(&self, digest: &ImageDigest, attempt: u32) -> PathBuf {
        self.root
            .join(RAW_RESPONSES_DIR)
            .join(format!("llm_resp_{}_{}.txt", digest, attempt))
    }
}

/// Writes to a sibling temp file first so readers never see a partial entry.
async fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), RepositoryError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let temp = path.with_extension(format!("tmp{}", std::process::id()));
    fs::write(&temp, contents).await?;
    if let Err(err) = fs::rename(&temp, path).await {
        let _ = fs::remove_file(&temp).await;
        return Err(err.into());
    }
    Ok(())
}

#[async_trait]
impl ExtractionCache for ExtractionCacheFs {
    async fn get(
        &self,
        digest: &ImageDigest,
    ) -> Result<Option<ReceiptExtraction>, RepositoryError> {
        let bytes = match fs::read(self.entry_path(digest)).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|_| RepositoryError::Serialization)
    }

    async fn put(
        &self,
        digest: &ImageDigest,
        extraction: &ReceiptExtraction,
    ) -> Result<(), RepositoryError> {
        let json =
            serde_json::to_vec_pretty(extraction).map_err(|_| RepositoryError::Serialization)?;
        write_atomically(&self.entry_path(digest), &json).await
    }

    async fn record_raw_response(
        &self,
        digest: &ImageDigest,
        attempt: u32,
        response: &str,
    ) -> Result<(), RepositoryError> {
        write_atomically(
            &self.raw_response_path(digest, attempt),
            response.as_bytes(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn digest() -> ImageDigest {
        ImageDigest::of_canonical_bytes(b"receipt pixels")
    }

    fn extraction() -> ReceiptExtraction {
        serde_json::from_value(json!({
            "date": "07042017",
            "total_amount": 29.01,
            "items": [{"name": "Unknown Item", "quantity": 1, "price": 25.23}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn should_miss_before_first_put() {
        let dir = tempdir().unwrap();
        let cache = ExtractionCacheFs::new(dir.path());

        assert!(cache.get(&digest()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_stored_extraction() {
        let dir = tempdir().unwrap();
        let cache = ExtractionCacheFs::new(dir.path().join("cache"));

        cache.put(&digest(), &extraction()).await.unwrap();

        assert_eq!(cache.get(&digest()).await.unwrap(), Some(extraction()));
        let file = dir
            .path()
            .join("cache")
            .join(format!("receipt_{}.json", digest()));
        assert!(file.exists());
    }

    #[tokio::test]
    async fn should_leave_no_temp_files_behind() {
        let dir = tempdir().unwrap();
        let cache = ExtractionCacheFs::new(dir.path());

        cache.put(&digest(), &extraction()).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec![format!("receipt_{}.json", digest())]);
    }

    #[tokio::test]
    async fn should_store_empty_extraction() {
        let dir = tempdir().unwrap();
        let cache = ExtractionCacheFs::new(dir.path());

        cache.put(&digest(), &ReceiptExtraction::default()).await.unwrap();

        assert_eq!(
            cache.get(&digest()).await.unwrap(),
            Some(ReceiptExtraction::default())
        );
    }

    #[tokio::test]
    async fn should_report_corrupt_entry() {
        let dir = tempdir().unwrap();
        let cache = ExtractionCacheFs::new(dir.path());
        std::fs::write(
            dir.path().join(format!("receipt_{}.json", digest())),
            "{ half",
        )
        .unwrap();

        assert!(matches!(
            cache.get(&digest()).await,
            Err(RepositoryError::Serialization)
        ));
    }

    #[tokio::test]
    async fn should_keep_raw_response_per_attempt() {
        let dir = tempdir().unwrap();
        let cache = ExtractionCacheFs::new(dir.path());

        cache.record_raw_response(&digest(), 1, "no json here").await.unwrap();
        cache.record_raw_response(&digest(), 2, "{}").await.unwrap();

        let texts = dir.path().join("texts");
        assert_eq!(
            std::fs::read_to_string(texts.join(format!("llm_resp_{}_1.txt", digest()))).unwrap(),
            "no json here"
        );
        assert_eq!(
            std::fs::read_to_string(texts.join(format!("llm_resp_{}_2.txt", digest()))).unwrap(),
            "{}"
        );
    }
}
