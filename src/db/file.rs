// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed storage medium: one file per key inside a data directory.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::store::{StorageBackend, StoreError};

const FILE_EXTENSION: &str = "json";

/// Storage medium that keeps each key in `<dir>/<percent-encoded key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (and create if needed) the data directory.
    pub async fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await?;
        tracing::info!(path = %dir.display(), "Opened file storage");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Encoding keeps keys containing '/' or '.' inside the data directory.
        let name = urlencoding::encode(key);
        self.dir.join(format!("{}.{}", name, FILE_EXTENSION))
    }

    fn key_for(path: &Path) -> Option<String> {
        if path.extension()?.to_str()? != FILE_EXTENSION {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        urlencoding::decode(stem).ok().map(|k| k.into_owned())
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    fn backend_tag(&self) -> &'static str {
        "file"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut keys = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if let Some(key) = Self::key_for(&entry.path()) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
