//! Basket Cart - the persistent shopping cart.
//!
//! # Architecture
//!
//! The cart is a thin imperative shell around the pure state machine in
//! `basket-core`:
//!
//! - [`storage`] - a pluggable key-value substrate ([`SledStore`] on disk,
//!   [`MemoryStore`] for tests and ephemeral use)
//! - [`snapshot`] - mirrors the line items to storage after every mutation
//!   and hydrates them back at startup, failing open on any storage fault
//! - [`notice`] - an outbound queue of user-facing confirmations, decoupled
//!   from the state transitions that produce them
//! - [`Cart`] - the facade tying the three together
//!
//! State is owned by exactly one [`Cart`] value and mutated only through
//! synchronous dispatches, so no two transitions can interleave. The storage
//! substrate is last-write-wins; no cross-process coordination is attempted.
//!
//! # Example
//!
//! ```rust
//! use basket_cart::{Cart, MemoryStore};
//! # use basket_core::{Product, ProductId, Rating};
//! # use rust_decimal::Decimal;
//!
//! # let product = Product {
//! #     id: ProductId::new(1),
//! #     title: "Mug".to_string(),
//! #     price: Decimal::new(1250, 2),
//! #     description: String::new(),
//! #     category: "home".to_string(),
//! #     image: String::new(),
//! #     rating: Rating { rate: 4.5, count: 10 },
//! # };
//! let mut cart = Cart::open(MemoryStore::new());
//! cart.add_item(&product);
//! assert!(cart.is_in_cart(product.id));
//! for notice in cart.drain_notices() {
//!     println!("{notice}");
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cart;
pub mod notice;
pub mod snapshot;
pub mod storage;

pub use cart::Cart;
pub use notice::{Notice, NoticeQueue};
pub use snapshot::{CART_STORAGE_KEY, SnapshotStore};
pub use storage::{MemoryStore, SledStore, Storage, StorageError};
