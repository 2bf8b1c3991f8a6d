//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A purchasable item as returned by the catalog API.
///
/// Products are immutable once fetched and are never persisted locally; the
/// cart keeps its own denormalized copies of the fields it needs (see
/// [`super::cart::LineItem`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identity, assigned by the catalog service.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price, non-negative. Rides JSON as a plain number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Long-form description.
    pub description: String,
    /// Category label (exact-match filterable).
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Aggregate customer rating.
    pub rating: Rating,
}

/// Aggregate rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating in `[0, 5]`.
    pub rate: f64,
    /// Number of reviews behind the average.
    pub count: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_shape() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.test/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Decimal::new(10995, 2));
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_price_round_trips_as_number() {
        let product = Product {
            id: ProductId::new(2),
            title: "Mug".to_string(),
            price: Decimal::new(1250, 2),
            description: String::new(),
            category: "home".to_string(),
            image: String::new(),
            rating: Rating {
                rate: 4.5,
                count: 10,
            },
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], serde_json::json!(12.5));
    }
}
