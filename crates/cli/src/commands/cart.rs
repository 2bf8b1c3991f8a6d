//! Cart management commands.
//!
//! The cart lives in a sled database under `BASKET_DATA_DIR` (default
//! `.basket`), so it survives between invocations the same way a browser
//! cart survives page reloads.

use std::error::Error;
use std::path::PathBuf;

use basket_cart::{Cart, SledStore};
use basket_catalog::{CatalogClient, CatalogConfig};
use basket_core::ProductId;

use super::{catalog_error, format_price};

fn data_dir() -> PathBuf {
    std::env::var("BASKET_DATA_DIR").map_or_else(|_| PathBuf::from(".basket"), PathBuf::from)
}

fn open_cart() -> Result<Cart<SledStore>, Box<dyn Error>> {
    let store = SledStore::open(data_dir().join("cart"))?;
    Ok(Cart::open(store))
}

fn print_notices(cart: &mut Cart<SledStore>) {
    for notice in cart.drain_notices() {
        println!("{notice}");
    }
}

/// `basket cart show`
pub fn show() -> Result<(), Box<dyn Error>> {
    let cart = open_cart()?;
    let state = cart.state();

    if state.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for item in &state.items {
        println!(
            "{:>4}  {:<50} {:>3} x {:>9} = {:>9}",
            item.id.as_u64(),
            item.title,
            item.quantity,
            format_price(item.price),
            format_price(item.line_price())
        );
    }
    println!(
        "\n{} item(s), total {}",
        state.total_items,
        format_price(state.total_price)
    );

    Ok(())
}

/// `basket cart add <id> [--quantity n]`
pub async fn add(id: u64, quantity: u32) -> Result<(), Box<dyn Error>> {
    if quantity == 0 {
        println!("Nothing to add.");
        return Ok(());
    }

    let config = CatalogConfig::from_env()?;
    let client = CatalogClient::new(&config);
    let product = client
        .product(ProductId::new(id))
        .await
        .map_err(|e| catalog_error(&e))?;

    let mut cart = open_cart()?;
    if quantity == 1 {
        cart.add_item(&product);
    } else {
        cart.add_items(&product, quantity);
        println!("Added {quantity} x {} to cart", product.title);
    }
    print_notices(&mut cart);

    Ok(())
}

/// `basket cart remove <id>`
pub fn remove(id: u64) -> Result<(), Box<dyn Error>> {
    let mut cart = open_cart()?;
    let id = ProductId::new(id);

    if !cart.is_in_cart(id) {
        println!("Product {id} is not in the cart.");
        return Ok(());
    }

    cart.remove_item(id);
    print_notices(&mut cart);

    Ok(())
}

/// `basket cart set <id> <quantity>`
pub fn set(id: u64, quantity: u32) -> Result<(), Box<dyn Error>> {
    let mut cart = open_cart()?;
    let id = ProductId::new(id);

    if !cart.is_in_cart(id) {
        println!("Product {id} is not in the cart; use `basket cart add {id}` first.");
        return Ok(());
    }

    cart.update_quantity(id, quantity);
    if quantity == 0 {
        println!("Removed product {id} from cart");
    } else {
        println!("Set product {id} quantity to {quantity}");
    }
    print_notices(&mut cart);

    Ok(())
}

/// `basket cart clear`
pub fn clear() -> Result<(), Box<dyn Error>> {
    let mut cart = open_cart()?;
    cart.clear();
    print_notices(&mut cart);

    Ok(())
}
