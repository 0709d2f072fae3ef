use std::path::{Path, PathBuf};

use crate::data::Data;
use crate::errors::{BlobError, BlobResult, DataError};

/// A fixed-size byte buffer backed by exactly one file.
///
/// The buffer is written back to the file when the blob is dropped, so a
/// mutation can't be lost by forgetting to call [`OnDiskBlob::flush`]. Use
/// [`OnDiskBlob::close`] to observe the outcome of that last write-back.
///
/// A write-back failure during drop can't be returned to anyone. It is logged
/// and then panics, unless the thread is already panicking.
#[derive(Debug)]
pub struct OnDiskBlob {
    path: PathBuf,
    data: Data,
    /// Set once `close` has done the final write-back.
    closed: bool,
}

impl OnDiskBlob {
    fn new(path: PathBuf, data: Data) -> Self {
        Self { path, data, closed: false }
    }

    /// Loads the blob stored at `path`.
    ///
    /// Returns `Ok(None)` if `path` is missing or is not a regular file,
    /// including when the file disappears between the check and the read.
    pub fn load_from_disk(path: impl AsRef<Path>) -> BlobResult<Option<Self>> {
        let path = path.as_ref();
        // fs::read on a directory doesn't report NotFound, so check the file type first.
        if !path.is_file() {
            tracing::debug!("no blob file at {}", path.display());
            return Ok(None);
        }
        match Data::load_from_file(path) {
            Ok(data) => {
                tracing::debug!("loaded blob {} ({} bytes)", path.display(), data.len());
                Ok(Some(Self::new(path.to_path_buf(), data)))
            }
            Err(DataError::FileDoesntExist(_)) => {
                tracing::debug!("blob file {} vanished before it could be read", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Creates a new zero-filled blob of `size` bytes at `path`.
    ///
    /// Returns `Ok(None)` if anything already exists at `path`; the existing
    /// object is left untouched.
    pub fn create_on_disk(path: impl AsRef<Path>, size: usize) -> BlobResult<Option<Self>> {
        let path = path.as_ref();
        let data = Data::zeroes(size);
        if !data.create_file(path)? {
            tracing::debug!("blob {} already exists", path.display());
            return Ok(None);
        }
        tracing::debug!("created blob {} ({} bytes)", path.display(), size);
        Ok(Some(Self::new(path.to_path_buf(), data)))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the backing file with the current buffer.
    pub fn flush(&mut self) -> BlobResult<()> {
        self.store_to_disk()
    }

    /// Does the final write-back and consumes the blob.
    pub fn close(mut self) -> BlobResult<()> {
        self.closed = true;
        self.store_to_disk()
    }

    fn store_to_disk(&self) -> BlobResult<()> {
        self.data
            .store_to_file(&self.path)
            .map_err(|e| BlobError::io(&self.path, e))?;
        tracing::debug!("stored blob {} ({} bytes)", self.path.display(), self.data.len());
        Ok(())
    }
}

impl AsRef<[u8]> for OnDiskBlob {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl AsMut<[u8]> for OnDiskBlob {
    fn as_mut(&mut self) -> &mut [u8] {
        self.data_mut()
    }
}

impl Drop for OnDiskBlob {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.store_to_disk() {
            tracing::error!("failed to write back blob {}: {:?}", self.path.display(), e);
            if !std::thread::panicking() {
                panic!("failed to write back blob {}: {}", self.path.display(), e);
            }
        }
    }
}
