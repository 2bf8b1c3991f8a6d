//! Cart line items and the cart aggregate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::product::Product;

/// A cart entry referencing a product by id.
///
/// Title, price, and image are copied from the [`Product`] at the moment it
/// is first added. Later catalog changes do not flow into existing line
/// items: the price a shopper saw when they added the item is the price the
/// cart keeps.
///
/// Invariant: `quantity >= 1`. A line item that would drop to zero is
/// deleted by the reducer instead of being stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identity; unique within a cart.
    pub id: ProductId,
    /// Denormalized product title.
    pub title: String,
    /// Units of this product in the cart.
    pub quantity: u32,
    /// Denormalized unit price at add time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Denormalized image URI.
    pub image: String,
}

impl LineItem {
    /// Create a line item from a catalog product.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            quantity,
            price: product.price,
            image: product.image.clone(),
        }
    }

    /// Price of this line (`quantity * unit price`).
    #[must_use]
    pub fn line_price(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

/// The cart aggregate: ordered line items plus derived totals.
///
/// Items keep insertion order; updates edit in place and never re-sort.
/// `total_items` and `total_price` are always recomputed from the items via
/// [`crate::totals::compute_totals`], never patched incrementally, so the
/// consistency invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// Sum of all quantities.
    pub total_items: u32,
    /// Sum of all line prices, at full decimal precision.
    pub total_price: Decimal,
}

impl CartState {
    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line item for a product, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether a line item with this product id exists.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    /// Current quantity for a product, or 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.line(id).map_or(0, |item| item.quantity)
    }
}
