//! The persistence bridge between cart state and storage.
//!
//! The persisted form is a JSON array of line-item records under a single
//! fixed key. Reads fail open: a missing, unreadable, or malformed snapshot
//! hydrates to an empty cart and is logged, never propagated. Writes follow
//! the snapshot rule: persist whenever the cart is non-empty, or whenever a
//! snapshot already exists (so emptying a previously persisted cart
//! overwrites it, while a never-persisted empty cart writes nothing).

use basket_core::LineItem;
use tracing::warn;

use crate::storage::Storage;

/// The single storage key holding the cart snapshot.
pub const CART_STORAGE_KEY: &str = "shopping-cart";

/// Loads and mirrors the cart's line items to a [`Storage`] backend.
#[derive(Debug)]
pub struct SnapshotStore<S> {
    storage: S,
}

impl<S: Storage> SnapshotStore<S> {
    /// Wrap a storage backend.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted line items, failing open to an empty collection.
    ///
    /// Stored records with a zero quantity violate the line-item invariant
    /// (the reducer can never produce one) and are dropped here.
    pub fn load(&self) -> Vec<LineItem> {
        let bytes = match self.storage.get(CART_STORAGE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(error) => {
                warn!(%error, "Failed to read cart snapshot; starting with an empty cart");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<LineItem>>(&bytes) {
            Ok(mut items) => {
                let before = items.len();
                items.retain(|item| item.quantity >= 1);
                if items.len() < before {
                    warn!(
                        dropped = before - items.len(),
                        "Dropped zero-quantity records from cart snapshot"
                    );
                }
                items
            }
            Err(error) => {
                warn!(%error, "Malformed cart snapshot; starting with an empty cart");
                Vec::new()
            }
        }
    }

    /// Whether a snapshot currently exists in storage.
    pub fn exists(&self) -> bool {
        matches!(self.storage.get(CART_STORAGE_KEY), Ok(Some(_)))
    }

    /// Mirror the current line items to storage per the snapshot rule.
    ///
    /// Storage faults are logged and swallowed: persistence is best-effort
    /// and must never disturb the in-memory state transition that already
    /// happened.
    pub fn persist(&self, items: &[LineItem]) {
        if items.is_empty() && !self.exists() {
            return;
        }

        match serde_json::to_vec(items) {
            Ok(bytes) => {
                if let Err(error) = self.storage.set(CART_STORAGE_KEY, &bytes) {
                    warn!(%error, "Failed to persist cart snapshot");
                }
            }
            Err(error) => warn!(%error, "Failed to serialize cart snapshot"),
        }
    }

    /// Delete the snapshot outright (explicit cart clear).
    pub fn remove(&self) {
        if let Err(error) = self.storage.remove(CART_STORAGE_KEY) {
            warn!(%error, "Failed to remove cart snapshot");
        }
    }
}
