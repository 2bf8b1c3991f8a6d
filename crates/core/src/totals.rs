//! Derived cart totals.

use rust_decimal::Decimal;

use crate::types::LineItem;

/// Aggregates derived from a line-item collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of quantities.
    pub total_items: u32,
    /// Sum of `quantity * unit price`, unrounded.
    pub total_price: Decimal,
}

/// Compute totals over a line-item collection.
///
/// Pure and total: empty input yields zero totals, and the price sum is kept
/// at full decimal precision. Rounding for display is a presentation
/// concern.
#[must_use]
pub fn compute_totals(items: &[LineItem]) -> Totals {
    Totals {
        total_items: items.iter().map(|item| item.quantity).sum(),
        total_price: items.iter().map(LineItem::line_price).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn item(id: u64, quantity: u32, price: Decimal) -> LineItem {
        LineItem {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            quantity,
            price,
            image: String::new(),
        }
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(compute_totals(&[]), Totals::default());
    }

    #[test]
    fn test_sums_quantities_and_line_prices() {
        let items = [
            item(1, 2, Decimal::new(1099, 2)),
            item(2, 1, Decimal::new(550, 2)),
            item(3, 3, Decimal::new(100, 2)),
        ];

        let totals = compute_totals(&items);
        assert_eq!(totals.total_items, 6);
        // 2 * 10.99 + 5.50 + 3 * 1.00 = 30.48
        assert_eq!(totals.total_price, Decimal::new(3048, 2));
    }

    #[test]
    fn test_full_precision_is_kept() {
        // 3 * 0.333 = 0.999; no rounding to cents happens here.
        let totals = compute_totals(&[item(1, 3, Decimal::new(333, 3))]);
        assert_eq!(totals.total_price, Decimal::new(999, 3));
    }
}
