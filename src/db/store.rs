use std::{
    fmt, io,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("storage unavailable: {path} does not hold a valid document: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("storage unavailable: cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },

    #[error("storage unavailable: cannot encode document: {0}")]
    Encode(serde_json::Error),
}

impl StoreError {
    /// True when the failure happened on the way out rather than on load.
    pub fn is_write(&self) -> bool {
        matches!(self, StoreError::Write { .. } | StoreError::Encode(_))
    }
}

/// A single JSON document on disk, read and replaced as a whole.
///
/// Every call goes to the filesystem. There is no caching and no locking:
/// two overlapping load/modify/save cycles can lose one of the writes.
pub struct JsonStore<T> {
    path: PathBuf,
    _document: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        JsonStore::new(self.path.clone())
    }
}

impl<T> fmt::Debug for JsonStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonStore").field("path", &self.path).finish()
    }
}

impl<T> JsonStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore {
            path: path.into(),
            _document: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub async fn load(&self) -> Result<T, StoreError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the document. The new content goes to a sibling temp file
    /// first and is renamed over the old one.
    pub async fn save(&self, document: &T) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(document).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        let tmp_path = self.tmp_path();
        if let Err(source) = tokio::fs::write(&tmp_path, content).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(self.write_error(source));
        }

        if let Err(source) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(self.write_error(source));
        }

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
