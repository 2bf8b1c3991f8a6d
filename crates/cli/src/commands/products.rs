//! Catalog browsing commands.

use std::error::Error;

use basket_catalog::{
    CatalogClient, CatalogConfig, PageWindow, ProductSort, filter_products, sort_products,
};
use basket_core::ProductId;

use super::{catalog_error, format_price, truncate};

fn client() -> Result<CatalogClient, Box<dyn Error>> {
    let config = CatalogConfig::from_env()?;
    Ok(CatalogClient::new(&config))
}

/// `basket products list`
pub async fn list(
    search: Option<&str>,
    category: Option<&str>,
    sort: Option<ProductSort>,
    page_size: usize,
    pages: usize,
) -> Result<(), Box<dyn Error>> {
    let client = client()?;
    let products = client.products().await.map_err(|e| catalog_error(&e))?;

    let mut listed = filter_products(&products, search.unwrap_or_default(), category);
    if let Some(sort) = sort {
        listed = sort_products(&listed, sort);
    }

    if listed.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    let mut window = PageWindow::with_items(page_size, listed);
    for _ in 1..pages {
        window.load_more();
    }

    for product in window.current() {
        println!(
            "{:>4}  {:<50} {:>9}  [{}]",
            product.id.as_u64(),
            truncate(&product.title, 50),
            format_price(product.price),
            product.category
        );
    }

    if window.has_more() {
        println!(
            "\nShowing {} of {} products. Re-run with --pages {} to load more.",
            window.shown(),
            window.total(),
            pages + 1
        );
    }

    Ok(())
}

/// `basket products show <id>`
pub async fn show(id: u64) -> Result<(), Box<dyn Error>> {
    let client = client()?;
    let product = client
        .product(ProductId::new(id))
        .await
        .map_err(|e| catalog_error(&e))?;

    println!("{}", product.title);
    println!("  Price:    {}", format_price(product.price));
    println!("  Category: {}", product.category);
    println!(
        "  Rating:   {:.1} ({} reviews)",
        product.rating.rate, product.rating.count
    );
    println!("  Image:    {}", product.image);
    println!("\n{}", product.description);

    Ok(())
}

/// `basket categories`
pub async fn categories() -> Result<(), Box<dyn Error>> {
    let client = client()?;
    let categories = client.categories().await.map_err(|e| catalog_error(&e))?;

    for category in categories {
        println!("{category}");
    }

    Ok(())
}
