use std::path::PathBuf;

use async_trait::async_trait;
use business::domain::errors::RepositoryError;
use business::domain::receipt::services::ImageStore;
use tokio::fs;

const KEY_LENGTH: usize = 32;

/// One file per blob key under a root directory.
pub struct ImageStoreFs {
    root: PathBuf,
}

impl ImageStoreFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Keys are generated server side as 32 lowercase hex characters; anything
    /// else could escape the root directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, RepositoryError> {
        let valid = key.len() == KEY_LENGTH
            && key
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if !valid {
            return Err(RepositoryError::InvalidKey);
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl ImageStore for ImageStoreFs {
    async fn store(&self, key: &str, image: &[u8]) -> Result<(), RepositoryError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await?;
        fs::write(path, image).await?;
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Vec<u8>, RepositoryError> {
        let path = self.path_for(key)?;
        Ok(fs::read(path).await?)
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        let path = self.path_for(key)?;
        fs::remove_file(path).await?;
        Ok(())
    }
}
