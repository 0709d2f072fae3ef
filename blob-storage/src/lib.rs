//! Fixed-size byte buffers backed one-to-one by files on disk.
//!
//! [`OnDiskBlob`] is the core: it is created exclusively or loaded from an
//! existing file, hands out direct access to its bytes, and writes them back
//! on [`OnDiskBlob::flush`], [`OnDiskBlob::close`] or drop. [`LocalBlobStore`]
//! allocates blob files inside one directory.
//!
//! ```no_run
//! use ondisk_blob_store::OnDiskBlob;
//!
//! # fn main() -> ondisk_blob_store::BlobResult<()> {
//! if let Some(mut blob) = OnDiskBlob::create_on_disk("/tmp/blob", 4)? {
//!     blob.data_mut().copy_from_slice(b"abcd");
//! } // written back here
//! # Ok(())
//! # }
//! ```

pub mod blob;
pub mod data;
pub mod errors;
pub mod key;
pub mod local_store;
pub mod store;

pub use blob::OnDiskBlob;
pub use data::Data;
pub use errors::{BlobError, BlobResult, DataError};
pub use key::BlobKey;
pub use local_store::{LocalBlobStore, LocalBlobStoreConfig};
pub use store::BlobStore;
