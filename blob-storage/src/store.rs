use crate::blob::OnDiskBlob;
use crate::errors::BlobResult;
use crate::key::BlobKey;

/// Trait for allocating, loading and removing blobs by key.
pub trait BlobStore {
    /// Creates a zero-filled blob of `size` bytes under a fresh random key.
    fn create(&self, size: usize) -> BlobResult<(BlobKey, OnDiskBlob)>;

    /// Creates a zero-filled blob under `key`, or returns `None` if the key is taken.
    fn try_create(&self, key: &BlobKey, size: usize) -> BlobResult<Option<OnDiskBlob>>;

    fn load(&self, key: &BlobKey) -> BlobResult<Option<OnDiskBlob>>;

    /// Removes the blob stored under `key`. Returns `true` if it existed.
    ///
    /// A blob still loaded for this key writes itself back when dropped and
    /// recreates the file, so drop it first.
    fn remove(&self, key: &BlobKey) -> BlobResult<bool>;

    fn num_blobs(&self) -> BlobResult<u64>;
}
