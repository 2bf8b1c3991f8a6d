//! Pluggable persistent key-value storage.
//!
//! The cart treats its persistence substrate as a plain byte-string store
//! keyed by string - the [`Storage`] trait is that boundary. [`SledStore`]
//! is the durable implementation; [`MemoryStore`] backs tests and ephemeral
//! carts.

pub mod memory;
pub mod sled;

pub use memory::MemoryStore;
pub use self::sled::SledStore;

use thiserror::Error;

/// Errors surfaced by a storage backend.
///
/// Callers above the snapshot layer never see these: cart hydration and
/// persistence fail open and log instead (see [`crate::snapshot`]).
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store failed.
    #[error("storage backend error: {0}")]
    Backend(#[from] ::sled::Error),
}

/// A string-keyed byte store with last-write-wins semantics.
///
/// Implementations are internally synchronized; all methods take `&self`.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be completed.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete the value under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete cannot be completed.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
