//! Integration test support for Basket.
//!
//! Spins up an axum stub of the catalog API on an ephemeral local port so
//! the tests can exercise the real `reqwest` client end to end without
//! touching the public service.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p basket-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;

use basket_core::{Product, ProductId, Rating};

/// A running stub catalog.
pub struct StubCatalog {
    /// Base URL to point a `CatalogConfig` at.
    pub base_url: String,
}

impl StubCatalog {
    /// Spawn a stub serving the [`sample_products`] fixture.
    pub async fn spawn() -> Self {
        serve(catalog_router()).await
    }

    /// Spawn a stub that answers 500 to everything.
    pub async fn spawn_failing() -> Self {
        let router = Router::new()
            .fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "internal error") });
        serve(router).await
    }

    /// Spawn a stub that counts hits on `/products`.
    ///
    /// Lets tests assert on the client's response cache: a second fetch that
    /// hits the cache leaves the counter untouched.
    pub async fn spawn_counting() -> (Self, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let router = Router::new().route(
            "/products",
            get(move || {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Json(sample_products())
                }
            }),
        );
        (serve(router).await, hits)
    }
}

async fn serve(router: Router) -> StubCatalog {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub catalog listener");
    let addr = listener.local_addr().expect("stub catalog address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("serve stub catalog");
    });

    StubCatalog {
        base_url: format!("http://{addr}"),
    }
}

fn catalog_router() -> Router {
    Router::new()
        .route("/products", get(|| async { Json(sample_products()) }))
        .route(
            "/products/categories",
            get(|| async { Json(sample_categories()) }),
        )
        .route("/products/category/{category}", get(products_in_category))
        .route("/products/{id}", get(product_by_id))
}

async fn product_by_id(Path(id): Path<u64>) -> Response {
    let id = ProductId::new(id);
    sample_products()
        .into_iter()
        .find(|product| product.id == id)
        .map_or_else(
            || StatusCode::NOT_FOUND.into_response(),
            |product| Json(product).into_response(),
        )
}

async fn products_in_category(Path(category): Path<String>) -> Json<Vec<Product>> {
    let products = sample_products()
        .into_iter()
        .filter(|product| product.category == category)
        .collect();
    Json(products)
}

/// The category labels behind [`sample_products`].
#[must_use]
pub fn sample_categories() -> Vec<String> {
    vec![
        "men's clothing".to_string(),
        "women's clothing".to_string(),
        "electronics".to_string(),
        "jewelery".to_string(),
    ]
}

/// A small catalog in the shape the public API returns.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    let entry = |id: u64, title: &str, cents: i64, description: &str, category: &str, rate: f64| {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Decimal::new(cents, 2),
            description: description.to_string(),
            category: category.to_string(),
            image: format!("https://stub.test/img/{id}.png"),
            rating: Rating { rate, count: 120 },
        }
    };

    vec![
        entry(
            1,
            "Fjallraven Foldsack Backpack",
            10995,
            "Fits 15 inch laptops, perfect for the forest or everyday carry",
            "men's clothing",
            3.9,
        ),
        entry(
            2,
            "Casual Premium Slim Fit T-Shirt",
            2230,
            "Slim-fitting style, contrast raglan long sleeve",
            "men's clothing",
            4.1,
        ),
        entry(
            3,
            "Rain Jacket Windbreaker",
            3999,
            "Lightweight striped shirt-jacket for spring hiking",
            "women's clothing",
            3.8,
        ),
        entry(
            4,
            "Portable External SSD 1TB",
            10900,
            "USB 3.0 and USB 2.0 compatibility, fast I/O",
            "electronics",
            4.8,
        ),
        entry(
            5,
            "Gold Plated Princess Ring",
            695,
            "Classic created wedding engagement solitaire",
            "jewelery",
            3.0,
        ),
        entry(
            6,
            "Mens Cotton Shirt",
            1599,
            "Great for casual wear and layering",
            "men's clothing",
            4.3,
        ),
    ]
}
