use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::blob::OnDiskBlob;
use crate::errors::{BlobError, BlobResult};
use crate::key::BlobKey;
use crate::store::BlobStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalBlobStoreConfig {
    /// Directory holding one file per blob.
    pub base_path: PathBuf,
    pub create_if_missing: bool,
}

impl Default for LocalBlobStoreConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("blobs"),
            create_if_missing: true,
        }
    }
}

/// A `BlobStore` that keeps each blob as `<base_path>/<key>`.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    base_path: PathBuf,
}

impl LocalBlobStore {
    pub fn new(config: LocalBlobStoreConfig) -> BlobResult<Self> {
        let base_path = config.base_path;
        match fs::metadata(&base_path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(BlobError::NotADirectory(base_path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if !config.create_if_missing {
                    return Err(BlobError::BaseDirMissing(base_path));
                }
                fs::create_dir_all(&base_path).map_err(|e| BlobError::io(&base_path, e))?;
                tracing::info!("created blob store directory {}", base_path.display());
            }
            Err(e) => return Err(BlobError::io(&base_path, e)),
        }
        Ok(Self { base_path })
    }

    /// Opens a store in an existing directory.
    pub fn open(base_path: impl Into<PathBuf>) -> BlobResult<Self> {
        Self::new(LocalBlobStoreConfig {
            base_path: base_path.into(),
            create_if_missing: false,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn blob_path(&self, key: &BlobKey) -> PathBuf {
        self.base_path.join(key.to_string())
    }
}

impl BlobStore for LocalBlobStore {
    fn create(&self, size: usize) -> BlobResult<(BlobKey, OnDiskBlob)> {
        loop {
            let key = BlobKey::random();
            if let Some(blob) = self.try_create(&key, size)? {
                return Ok((key, blob));
            }
            tracing::warn!("blob key {} collided, retrying with a new key", key);
        }
    }

    fn try_create(&self, key: &BlobKey, size: usize) -> BlobResult<Option<OnDiskBlob>> {
        OnDiskBlob::create_on_disk(self.blob_path(key), size)
    }

    fn load(&self, key: &BlobKey) -> BlobResult<Option<OnDiskBlob>> {
        OnDiskBlob::load_from_disk(self.blob_path(key))
    }

    fn remove(&self, key: &BlobKey) -> BlobResult<bool> {
        let path = self.blob_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("removed blob {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(BlobError::io(path, e)),
        }
    }

    fn num_blobs(&self) -> BlobResult<u64> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| BlobError::io(&self.base_path, e))?;
        let mut count = 0;
        for entry in entries {
            let entry = entry.map_err(|e| BlobError::io(&self.base_path, e))?;
            let is_file = entry
                .file_type()
                .map_err(|e| BlobError::io(entry.path(), e))?
                .is_file();
            let is_key = entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.parse::<BlobKey>().is_ok());
            if is_file && is_key {
                count += 1;
            }
        }
        Ok(count)
    }
}
