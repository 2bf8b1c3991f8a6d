//! Client-side product search and sorting.
//!
//! Pure transformations over fetched product lists. The catalog API has no
//! search endpoint, so search is a substring filter over what we already
//! fetched; an empty query is a substring of everything and therefore
//! matches every product.

use basket_core::Product;

/// Filter products by a case-insensitive substring and optional category.
///
/// A product matches when `query` occurs in its title OR description
/// (case-insensitive) AND, if `category` is given, its category label
/// matches exactly. Returns a new list; the input is never mutated.
#[must_use]
pub fn filter_products(products: &[Product], query: &str, category: Option<&str>) -> Vec<Product> {
    let query = query.to_lowercase();

    products
        .iter()
        .filter(|product| {
            let matches_query = product.title.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query);
            let matches_category = category.is_none_or(|c| product.category == c);
            matches_query && matches_category
        })
        .cloned()
        .collect()
}

/// Sort keys for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSort {
    /// Cheapest first.
    PriceAscending,
    /// Most expensive first.
    PriceDescending,
    /// Title, lexical order.
    Title,
    /// Best rated first.
    Rating,
}

/// Stable-sort products by the given key, returning a new list.
#[must_use]
pub fn sort_products(products: &[Product], sort: ProductSort) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match sort {
        ProductSort::PriceAscending => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        ProductSort::PriceDescending => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        ProductSort::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
        ProductSort::Rating => sorted.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
    }
    sorted
}
