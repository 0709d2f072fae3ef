use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type BlobResult<T> = Result<T, BlobError>;

/// Errors raised by the raw byte-buffer layer.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("file does not exist: {0}")]
    FileDoesntExist(PathBuf),

    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum BlobError {
    /// Reading or writing a backing file failed. For write-back this means
    /// the in-memory buffer could not be persisted.
    #[error("I/O error on blob file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("blob store directory {0} does not exist")]
    BaseDirMissing(PathBuf),

    #[error("blob store path {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("invalid blob key {0:?}")]
    InvalidKey(String),
}

impl BlobError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BlobError::Io { path: path.into(), source }
    }
}

impl From<DataError> for BlobError {
    fn from(e: DataError) -> Self {
        match e {
            DataError::FileDoesntExist(path) => {
                BlobError::io(path, io::Error::from(io::ErrorKind::NotFound))
            }
            DataError::Io { path, source } => BlobError::Io { path, source },
        }
    }
}
