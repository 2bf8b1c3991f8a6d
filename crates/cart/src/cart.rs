//! The cart facade.

use basket_core::{CartAction, CartState, Product, ProductId, reduce};

use crate::notice::{Notice, NoticeQueue};
use crate::snapshot::SnapshotStore;
use crate::storage::Storage;

/// A persistent shopping cart.
///
/// Owns the in-memory [`CartState`] and keeps it mirrored to storage. Every
/// mutation is a synchronous dispatch into the `basket-core` reducer
/// followed by a best-effort snapshot write; user-facing confirmations land
/// in an outbound queue (see [`crate::notice`]) rather than being rendered
/// here.
#[derive(Debug)]
pub struct Cart<S> {
    state: CartState,
    snapshots: SnapshotStore<S>,
    notices: NoticeQueue,
}

impl<S: Storage> Cart<S> {
    /// Open a cart over a storage backend, hydrating any persisted snapshot.
    ///
    /// Never fails: a missing or unreadable snapshot yields an empty cart.
    pub fn open(storage: S) -> Self {
        let snapshots = SnapshotStore::new(storage);
        let items = snapshots.load();
        let state = reduce(&CartState::default(), CartAction::LoadCart(items));
        Self {
            state,
            snapshots,
            notices: NoticeQueue::new(),
        }
    }

    /// The current cart state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Whether a line item with this product id exists.
    #[must_use]
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.state.contains(id)
    }

    /// Current quantity for a product, or 0 if absent.
    #[must_use]
    pub fn item_quantity(&self, id: ProductId) -> u32 {
        self.state.quantity_of(id)
    }

    /// Add one unit of a product.
    ///
    /// The confirmation depends on the *pre-mutation* state: adding a
    /// product that is already in the cart reads as a quantity update.
    pub fn add_item(&mut self, product: &Product) {
        let already_in_cart = self.state.contains(product.id);
        self.dispatch(CartAction::AddItem(product.clone()));

        let title = product.title.clone();
        self.notices.push(if already_in_cart {
            Notice::QuantityUpdated { title }
        } else {
            Notice::ItemAdded { title }
        });
    }

    /// Add several units of a product at once.
    ///
    /// A zero quantity is a no-op (normalized by the reducer). No
    /// confirmation is emitted for bulk adds.
    pub fn add_items(&mut self, product: &Product, quantity: u32) {
        self.dispatch(CartAction::AddMultipleItems {
            product: product.clone(),
            quantity,
        });
    }

    /// Remove a line item. Removing an absent id is a silent no-op.
    pub fn remove_item(&mut self, id: ProductId) {
        let removed_title = self.state.line(id).map(|item| item.title.clone());
        self.dispatch(CartAction::RemoveItem(id));

        if let Some(title) = removed_title {
            self.notices.push(Notice::ItemRemoved { title });
        }
    }

    /// Set the quantity for a line item.
    ///
    /// Zero removes the item; an unknown id leaves the cart unchanged. No
    /// confirmation is emitted.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        self.dispatch(CartAction::UpdateQuantity { id, quantity });
    }

    /// Empty the cart and delete the persisted snapshot outright.
    pub fn clear(&mut self) {
        self.state = reduce(&self.state, CartAction::ClearCart);
        self.snapshots.remove();
        self.notices.push(Notice::CartCleared);
    }

    /// Take all pending confirmations, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    /// Apply an action and mirror the result to storage.
    fn dispatch(&mut self, action: CartAction) {
        self.state = reduce(&self.state, action);
        self.snapshots.persist(&self.state.items);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use basket_core::Rating;
    use rust_decimal::Decimal;

    use super::*;
    use crate::snapshot::CART_STORAGE_KEY;
    use crate::storage::MemoryStore;

    fn product(id: u64, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            description: String::new(),
            category: "test".to_string(),
            image: String::new(),
            rating: Rating {
                rate: 4.0,
                count: 1,
            },
        }
    }

    #[test]
    fn test_open_on_empty_storage_is_an_empty_cart() {
        let cart = Cart::open(MemoryStore::new());
        assert!(cart.state().is_empty());
        assert_eq!(cart.state().total_items, 0);
    }

    #[test]
    fn test_mutations_survive_reopen() {
        let storage = MemoryStore::new();
        let p = product(1, Decimal::new(1099, 2));

        let mut cart = Cart::open(storage.clone());
        cart.add_item(&p);
        cart.add_items(&product(2, Decimal::new(500, 2)), 3);
        drop(cart);

        let reopened = Cart::open(storage);
        assert_eq!(reopened.item_quantity(p.id), 1);
        assert_eq!(reopened.item_quantity(ProductId::new(2)), 3);
        assert_eq!(reopened.state().total_items, 4);
        assert_eq!(reopened.state().total_price, Decimal::new(2599, 2));
    }

    #[test]
    fn test_first_mutation_out_of_empty_cart_persists() {
        let storage = MemoryStore::new();
        let mut cart = Cart::open(storage.clone());
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap(), None);

        cart.add_item(&product(1, Decimal::ONE));
        assert!(storage.get(CART_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_no_op_mutations_on_fresh_cart_do_not_persist() {
        let storage = MemoryStore::new();
        let mut cart = Cart::open(storage.clone());

        cart.remove_item(ProductId::new(1));
        cart.update_quantity(ProductId::new(1), 5);
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_clear_removes_the_snapshot() {
        let storage = MemoryStore::new();
        let mut cart = Cart::open(storage.clone());

        cart.add_item(&product(1, Decimal::ONE));
        assert!(storage.get(CART_STORAGE_KEY).unwrap().is_some());

        cart.clear();
        assert!(cart.state().is_empty());
        assert_eq!(storage.get(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_notices_distinguish_new_from_existing() {
        let mut cart = Cart::open(MemoryStore::new());
        let p = product(1, Decimal::ONE);

        cart.add_item(&p);
        cart.add_item(&p);

        assert_eq!(
            cart.drain_notices(),
            vec![
                Notice::ItemAdded {
                    title: p.title.clone()
                },
                Notice::QuantityUpdated { title: p.title }
            ]
        );
    }

    #[test]
    fn test_remove_notice_carries_the_stored_title() {
        let mut cart = Cart::open(MemoryStore::new());
        let p = product(1, Decimal::ONE);
        cart.add_item(&p);
        cart.drain_notices();

        cart.remove_item(p.id);
        assert_eq!(
            cart.drain_notices(),
            vec![Notice::ItemRemoved { title: p.title }]
        );

        // Removing something that is not there stays silent.
        cart.remove_item(ProductId::new(9));
        assert!(cart.drain_notices().is_empty());
    }

    #[test]
    fn test_update_quantity_and_bulk_add_are_silent() {
        let mut cart = Cart::open(MemoryStore::new());
        let p = product(1, Decimal::ONE);

        cart.add_items(&p, 2);
        cart.update_quantity(p.id, 5);
        assert!(cart.drain_notices().is_empty());
        assert_eq!(cart.item_quantity(p.id), 5);
    }

    #[test]
    fn test_corrupt_snapshot_hydrates_empty_and_recovers() {
        let storage = MemoryStore::new();
        storage.set(CART_STORAGE_KEY, b"corrupt").unwrap();

        let mut cart = Cart::open(storage.clone());
        assert!(cart.state().is_empty());

        // The next mutation overwrites the corrupt value.
        cart.add_item(&product(1, Decimal::ONE));
        drop(cart);
        let reopened = Cart::open(storage);
        assert_eq!(reopened.state().total_items, 1);
    }

    #[test]
    fn test_quantity_queries() {
        let mut cart = Cart::open(MemoryStore::new());
        let p = product(1, Decimal::ONE);

        assert!(!cart.is_in_cart(p.id));
        cart.add_items(&p, 4);
        assert!(cart.is_in_cart(p.id));
        assert_eq!(cart.item_quantity(p.id), 4);
        assert_eq!(cart.item_quantity(ProductId::new(2)), 0);
    }
}
