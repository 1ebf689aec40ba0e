use crate::domain::ports::{TokenStore, TOKEN_KEY};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Token storage backed by a file named after the fixed token key inside the
/// configured directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    base_path: String,
}

impl FileTokenStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn token_file(&self) -> PathBuf {
        Path::new(&self.base_path).join(TOKEN_KEY)
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn save_token(&self, token: &str) -> Result<()> {
        let path = self.token_file();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, token)?;
        Ok(())
    }

    async fn load_token(&self) -> Result<Option<String>> {
        let path = self.token_file();
        if !path.exists() {
            return Ok(None);
        }

        let token = fs::read_to_string(path)?;
        let token = token.trim();
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }

    async fn clear_token(&self) -> Result<()> {
        let path = self.token_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_token_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().to_string_lossy().to_string());

        assert_eq!(store.load_token().await.unwrap(), None);

        store.save_token("abc123").await.unwrap();
        assert_eq!(store.load_token().await.unwrap(), Some("abc123".to_string()));

        store.clear_token().await.unwrap();
        assert_eq!(store.load_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("state").join("auth");
        let store = FileTokenStore::new(nested.to_string_lossy().to_string());

        store.save_token("abc123").await.unwrap();
        assert!(nested.join(TOKEN_KEY).exists());
    }

    #[tokio::test]
    async fn test_blank_token_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().to_string_lossy().to_string());

        std::fs::write(dir.path().join(TOKEN_KEY), "  \n").unwrap();
        assert_eq!(store.load_token().await.unwrap(), None);
    }
}
