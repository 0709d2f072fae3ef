use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::path::Path;

use crate::errors::DataError;

/// A fixed-length, owned byte buffer that can be loaded from and stored to a file.
///
/// The length is decided when the buffer is built and never changes afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Data {
    bytes: Box<[u8]>,
}

impl Data {
    /// Allocates `size` bytes, all zero.
    pub fn zeroes(size: usize) -> Self {
        Self { bytes: vec![0u8; size].into_boxed_slice() }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn fill_with_zeroes(&mut self) {
        self.bytes.fill(0);
    }

    /// Reads the whole file at `path` into a new buffer of the file's length.
    pub fn load_from_file(path: &Path) -> Result<Self, DataError> {
        match fs::read(path) {
            Ok(bytes) => Ok(Self::from(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(DataError::FileDoesntExist(path.to_path_buf()))
            }
            Err(source) => Err(DataError::Io { path: path.to_path_buf(), source }),
        }
    }

    /// Replaces the contents of `path` with this buffer, creating the file if needed.
    pub fn store_to_file(&self, path: &Path) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.write_all(&self.bytes)?;
        file.sync_all()
    }

    /// Writes this buffer to a new file at `path`.
    ///
    /// Returns `Ok(false)` without touching anything if something already
    /// exists at `path`; the check and the creation happen in one syscall.
    pub fn create_file(&self, path: &Path) -> Result<bool, DataError> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(source) => return Err(DataError::Io { path: path.to_path_buf(), source }),
        };
        file.write_all(&self.bytes)
            .and_then(|_| file.sync_all())
            .map_err(|source| DataError::Io { path: path.to_path_buf(), source })?;
        Ok(true)
    }
}

impl From<Vec<u8>> for Data {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes: bytes.into_boxed_slice() }
    }
}

impl Deref for Data {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for Data {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl AsRef<[u8]> for Data {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsMut<[u8]> for Data {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data").field("len", &self.bytes.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_zeroes() {
        let data = Data::zeroes(64);
        assert_eq!(data.len(), 64);
        assert!(data.iter().all(|b| *b == 0));
        assert!(Data::zeroes(0).is_empty());
    }

    #[test]
    fn test_fill_with_zeroes() {
        let mut data = Data::from(vec![1, 2, 3, 4]);
        data.fill_with_zeroes();
        assert_eq!(data.as_ref(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_store_then_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("data");

        let data = Data::from(b"some bytes".to_vec());
        data.store_to_file(&path).unwrap();

        let loaded = Data::load_from_file(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_store_overwrites_longer_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("data");
        fs::write(&path, b"a much longer previous content").unwrap();

        Data::from(b"short".to_vec()).store_to_file(&path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("missing");

        match Data::load_from_file(&path) {
            Err(DataError::FileDoesntExist(p)) => assert_eq!(p, path),
            other => panic!("expected FileDoesntExist, got {:?}", other),
        }
    }

    #[test]
    fn test_create_file_is_exclusive() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("data");

        assert!(Data::zeroes(4).create_file(&path).unwrap());
        assert!(!Data::from(vec![9; 8]).create_file(&path).unwrap());
        assert_eq!(fs::read(&path).unwrap(), vec![0; 4]);
    }

    #[test]
    fn test_create_file_missing_parent() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("no_such_dir").join("data");

        let err = Data::zeroes(1).create_file(&path).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }
}
