//! Key/value blob storage for the persisted cart.
//!
//! A [`StorageAdapter`] is the `localStorage` equivalent the cart writes its snapshot to after
//! every mutation and reads once at startup. Values are opaque strings (the cart stores JSON).
//!
//! ## Provided backends
//! - [`MemoryStorage`]: shared in-process map. Clones see the same data, which is how tests model
//!   a page reload in the same browser profile.
//! - [`FileStorage`]: one `<key>.json` file per key under a directory.
//!
//! ## Design notes
//! - Calls are synchronous; the cart never suspends mid-mutation to wait for storage.
//! - Writes are best-effort from the cart's point of view. A failing `set_item` is logged by the
//!   caller and never rolls back in-memory state.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors raised by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A synchronous key/value blob store.
pub trait StorageAdapter: Send + Sync {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
