//! The cart state machine.
//!
//! [`reduce`] is a pure transition function over [`CartState`]: it never
//! fails and it never mutates its input. Invalid inputs are normalized
//! rather than rejected - an unknown product id is a no-op, and a zero
//! quantity is an alias for removal - so there is no error state to handle
//! anywhere downstream.

use crate::totals::compute_totals;
use crate::types::{CartState, LineItem, Product, ProductId};

/// A cart transition.
///
/// A closed sum type with an exhaustive match in [`reduce`]; adding a
/// variant is a compile error until every consumer handles it.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Replace the line items wholesale. Used once at startup to hydrate
    /// from the persisted snapshot.
    LoadCart(Vec<LineItem>),
    /// Add one unit of a product, appending a new line item if needed.
    AddItem(Product),
    /// Add `quantity` units at once; equivalent to that many `AddItem`s.
    /// `quantity == 0` is a no-op.
    AddMultipleItems {
        /// The product to add.
        product: Product,
        /// How many units to add.
        quantity: u32,
    },
    /// Delete the line item with this id, if present.
    RemoveItem(ProductId),
    /// Set the quantity for a line item. Zero removes the item; an unknown
    /// id leaves the state unchanged.
    UpdateQuantity {
        /// The product whose line item to update.
        id: ProductId,
        /// The new quantity.
        quantity: u32,
    },
    /// Reset to the empty initial state.
    ClearCart,
}

/// Apply an action to a cart state, returning the next state.
///
/// Totals are recomputed from scratch after every transition that touches
/// the item collection, never adjusted incrementally, so the consistency
/// invariant (`total_items == sum of quantities`, `total_price == sum of
/// line prices`) cannot drift.
#[must_use]
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    match action {
        CartAction::LoadCart(items) => with_totals(items),

        CartAction::AddItem(product) => add_units(state, &product, 1),

        CartAction::AddMultipleItems { product, quantity } => {
            if quantity == 0 {
                return state.clone();
            }
            add_units(state, &product, quantity)
        }

        CartAction::RemoveItem(id) => {
            let items = state
                .items
                .iter()
                .filter(|item| item.id != id)
                .cloned()
                .collect();
            with_totals(items)
        }

        CartAction::UpdateQuantity { id, quantity } => {
            if quantity == 0 {
                // Deliberate alias, not a separate code path.
                return reduce(state, CartAction::RemoveItem(id));
            }
            if !state.contains(id) {
                return state.clone();
            }
            let items = state
                .items
                .iter()
                .map(|item| {
                    if item.id == id {
                        LineItem {
                            quantity,
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect();
            with_totals(items)
        }

        CartAction::ClearCart => CartState::default(),
    }
}

/// Add `quantity` units of a product, merging into an existing line item.
///
/// An existing line keeps its denormalized title/price/image; only the
/// quantity moves. A fresh line copies all display fields from the product.
fn add_units(state: &CartState, product: &Product, quantity: u32) -> CartState {
    let mut items = state.items.clone();
    if let Some(existing) = items.iter_mut().find(|item| item.id == product.id) {
        existing.quantity += quantity;
    } else {
        items.push(LineItem::from_product(product, quantity));
    }
    with_totals(items)
}

fn with_totals(items: Vec<LineItem>) -> CartState {
    let totals = compute_totals(&items);
    CartState {
        items,
        total_items: totals.total_items,
        total_price: totals.total_price,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::Rating;

    fn product(id: u64, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price,
            description: String::new(),
            category: "test".to_string(),
            image: format!("https://example.test/{id}.jpg"),
            rating: Rating {
                rate: 4.0,
                count: 7,
            },
        }
    }

    fn assert_totals_consistent(state: &CartState) {
        let totals = compute_totals(&state.items);
        assert_eq!(state.total_items, totals.total_items);
        assert_eq!(state.total_price, totals.total_price);
    }

    #[test]
    fn test_load_cart_replaces_and_recomputes() {
        let start = reduce(
            &CartState::default(),
            CartAction::AddItem(product(9, Decimal::ONE)),
        );
        let items = vec![
            LineItem::from_product(&product(1, Decimal::new(1099, 2)), 2),
            LineItem::from_product(&product(2, Decimal::new(550, 2)), 1),
        ];

        let state = reduce(&start, CartAction::LoadCart(items.clone()));
        assert_eq!(state.items, items);
        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price, Decimal::new(2748, 2));
    }

    #[test]
    fn test_add_item_twice_merges_into_one_line() {
        let p = product(1, Decimal::new(1099, 2));
        let state = reduce(&CartState::default(), CartAction::AddItem(p.clone()));
        let state = reduce(&state, CartAction::AddItem(p));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items.first().unwrap().quantity, 2);
        assert_totals_consistent(&state);
    }

    #[test]
    fn test_repeat_add_does_not_refresh_price() {
        let original = product(1, Decimal::new(1000, 2));
        let repriced = Product {
            price: Decimal::new(2000, 2),
            title: "Renamed".to_string(),
            ..original.clone()
        };

        let state = reduce(&CartState::default(), CartAction::AddItem(original.clone()));
        let state = reduce(&state, CartAction::AddItem(repriced));

        let line = state.line(original.id).unwrap();
        assert_eq!(line.price, original.price);
        assert_eq!(line.title, original.title);
        assert_eq!(line.quantity, 2);
        assert_eq!(state.total_price, Decimal::new(2000, 2));
    }

    #[test]
    fn test_add_multiple_items_on_empty_cart() {
        let p = product(1, Decimal::new(499, 2));
        let state = reduce(
            &CartState::default(),
            CartAction::AddMultipleItems {
                product: p.clone(),
                quantity: 3,
            },
        );

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.quantity_of(p.id), 3);
        assert_eq!(state.total_price, p.price * Decimal::from(3u32));
    }

    #[test]
    fn test_add_multiple_items_merges_with_existing_line() {
        let p = product(1, Decimal::ONE);
        let state = reduce(&CartState::default(), CartAction::AddItem(p.clone()));
        let state = reduce(
            &state,
            CartAction::AddMultipleItems {
                product: p.clone(),
                quantity: 4,
            },
        );

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.quantity_of(p.id), 5);
        assert_totals_consistent(&state);
    }

    #[test]
    fn test_add_multiple_items_zero_is_a_no_op() {
        let state = reduce(&CartState::default(), CartAction::AddItem(product(1, Decimal::ONE)));
        let next = reduce(
            &state,
            CartAction::AddMultipleItems {
                product: product(2, Decimal::ONE),
                quantity: 0,
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_add_then_remove_leaves_id_absent() {
        let p = product(1, Decimal::new(1099, 2));
        // Regardless of the starting state.
        let starts = [
            CartState::default(),
            reduce(&CartState::default(), CartAction::AddItem(product(2, Decimal::ONE))),
            reduce(&CartState::default(), CartAction::AddItem(p.clone())),
        ];

        for start in starts {
            let state = reduce(&start, CartAction::AddItem(p.clone()));
            let state = reduce(&state, CartAction::RemoveItem(p.id));
            assert!(!state.contains(p.id));
            assert_totals_consistent(&state);
        }
    }

    #[test]
    fn test_remove_absent_id_is_a_no_op() {
        let state = reduce(&CartState::default(), CartAction::AddItem(product(1, Decimal::ONE)));
        let next = reduce(&state, CartAction::RemoveItem(ProductId::new(99)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_update_quantity_sets_existing_line() {
        let p = product(1, Decimal::new(250, 2));
        let state = reduce(&CartState::default(), CartAction::AddItem(p.clone()));
        let state = reduce(
            &state,
            CartAction::UpdateQuantity {
                id: p.id,
                quantity: 7,
            },
        );

        assert_eq!(state.quantity_of(p.id), 7);
        assert_eq!(state.total_price, Decimal::new(1750, 2));
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let p = product(1, Decimal::new(1099, 2));
        let base = reduce(&CartState::default(), CartAction::AddItem(product(2, Decimal::ONE)));
        let base = reduce(&base, CartAction::AddItem(p.clone()));

        let via_update = reduce(
            &base,
            CartAction::UpdateQuantity {
                id: p.id,
                quantity: 0,
            },
        );
        let via_remove = reduce(&base, CartAction::RemoveItem(p.id));

        assert_eq!(via_update, via_remove);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_a_no_op() {
        let state = reduce(&CartState::default(), CartAction::AddItem(product(1, Decimal::ONE)));
        let next = reduce(
            &state,
            CartAction::UpdateQuantity {
                id: ProductId::new(42),
                quantity: 3,
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_clear_cart_yields_empty_state() {
        let state = reduce(&CartState::default(), CartAction::AddItem(product(1, Decimal::ONE)));
        let state = reduce(&state, CartAction::ClearCart);
        assert_eq!(state, CartState::default());
        assert_eq!(state.total_items, 0);
        assert_eq!(state.total_price, Decimal::ZERO);
    }

    #[test]
    fn test_insertion_order_is_preserved_across_updates() {
        let a = product(1, Decimal::ONE);
        let b = product(2, Decimal::ONE);
        let c = product(3, Decimal::ONE);

        let mut state = CartState::default();
        for p in [&a, &b, &c] {
            state = reduce(&state, CartAction::AddItem((*p).clone()));
        }
        state = reduce(
            &state,
            CartAction::UpdateQuantity {
                id: a.id,
                quantity: 5,
            },
        );
        state = reduce(&state, CartAction::AddItem(b.clone()));

        let order: Vec<ProductId> = state.items.iter().map(|item| item.id).collect();
        assert_eq!(order, vec![a.id, b.id, c.id]);
    }

    #[test]
    fn test_totals_hold_after_arbitrary_action_sequences() {
        let a = product(1, Decimal::new(1099, 2));
        let b = product(2, Decimal::new(333, 3));

        let actions = vec![
            CartAction::AddItem(a.clone()),
            CartAction::AddMultipleItems {
                product: b.clone(),
                quantity: 4,
            },
            CartAction::UpdateQuantity {
                id: a.id,
                quantity: 3,
            },
            CartAction::AddItem(b.clone()),
            CartAction::RemoveItem(a.id),
            CartAction::UpdateQuantity {
                id: b.id,
                quantity: 0,
            },
            CartAction::AddItem(a),
        ];

        let mut state = CartState::default();
        for action in actions {
            state = reduce(&state, action);
            assert_totals_consistent(&state);
        }
    }
}
