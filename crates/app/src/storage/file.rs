//! File-backed key-value store.

use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};
use tracing::debug;

use super::{KeyValueStore, StorageError};

type Document = BTreeMap<String, String>;

/// Key-value store persisted as a single JSON object on disk.
///
/// Keys are kept inside the document rather than mapped to paths, so they may contain any
/// character. A missing file reads as an empty store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_document(&self) -> Result<Document, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            }),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(Document::new()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    async fn write_document(&self, document: &Document) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(document).map_err(StorageError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        // Rename over the target so readers never observe a partial document.
        let staging = self.staging_path();

        fs::write(&staging, bytes)
            .await
            .map_err(|source| self.io_error(source))?;

        fs::rename(&staging, &self.path)
            .await
            .map_err(|source| self.io_error(source))
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();

        name.push(".tmp");

        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;

        Ok(self.read_document().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;

        let mut document = self.read_document().await?;
        document.insert(key.to_string(), value);

        self.write_document(&document).await?;

        debug!(path = %self.path.display(), key, "wrote storage document");

        Ok(())
    }
}
