//! Core types for Basket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{CartState, LineItem};
pub use id::*;
pub use product::{Product, Rating};
