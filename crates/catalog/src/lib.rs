//! Basket Catalog - client and query helpers for the product catalog API.
//!
//! # Architecture
//!
//! - The catalog is the source of truth for products - no local sync, direct
//!   REST calls via `reqwest`
//! - In-memory caching via `moka` for API responses (5 minute TTL)
//! - Search, sort, and pagination are client-side, pure, and separate from
//!   the network layer so they stay independently testable
//!
//! # Example
//!
//! ```rust,ignore
//! use basket_catalog::{CatalogClient, CatalogConfig, ProductSort, filter_products, sort_products};
//!
//! let client = CatalogClient::new(&CatalogConfig::from_env()?);
//!
//! let products = client.products().await?;
//! let shirts = filter_products(&products, "shirt", None);
//! let cheapest_first = sort_products(&shirts, ProductSort::PriceAscending);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod cache;
mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod pagination;

pub use client::CatalogClient;
pub use config::{CatalogConfig, ConfigError};
pub use error::CatalogError;
pub use filter::{ProductSort, filter_products, sort_products};
pub use pagination::PageWindow;
