//! Durable storage backend on sled.

use std::path::Path;

use super::{Storage, StorageError};

/// A durable [`Storage`] implementation backed by a sled tree.
///
/// Every write is flushed before returning, so a cart mutation that has
/// been acknowledged survives an immediate process exit. Handles are cheap
/// to clone and share the same underlying tree.
#[derive(Debug, Clone)]
pub struct SledStore {
    db: ::sled::Db,
}

impl SledStore {
    /// Open (or create) a store at the given directory path.
    ///
    /// # Errors
    ///
    /// Returns an error if the sled environment cannot be opened, e.g. the
    /// path is not writable or another process holds the lock.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = ::sled::Config::new()
            .path(path.as_ref())
            .mode(::sled::Mode::HighThroughput)
            .flush_every_ms(Some(1000))
            .open()?;
        Ok(Self { db })
    }
}

impl Storage for SledStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(key)?.map(|value| value.to_vec()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        self.db.insert(key, value)?;
        self.db.flush()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db.remove(key)?;
        self.db.flush()?;
        Ok(())
    }
}
