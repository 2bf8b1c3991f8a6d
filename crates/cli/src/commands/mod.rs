//! CLI command implementations.

pub mod cart;
pub mod products;

use basket_catalog::CatalogError;
use rust_decimal::Decimal;

/// Wrap a catalog error with its user-facing retry copy.
pub fn catalog_error(error: &CatalogError) -> Box<dyn std::error::Error> {
    format!("{} ({error})", error.user_message()).into()
}

/// Format a price for display, e.g. `$19.99`.
pub fn format_price(price: Decimal) -> String {
    format!("${price:.2}")
}

/// Truncate long product text for list output.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
