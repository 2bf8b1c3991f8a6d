//! Basket CLI - a command-line storefront over the catalog and cart crates.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! basket products list
//! basket products list --search shirt --sort price-asc --page-size 5
//! basket products show 3
//! basket categories
//!
//! # Manage the persistent cart
//! basket cart add 3 --quantity 2
//! basket cart show
//! basket cart set 3 5
//! basket cart remove 3
//! basket cart clear
//! ```
//!
//! # Environment
//!
//! - `CATALOG_BASE_URL` - catalog endpoint (default: the public Fake Store API)
//! - `BASKET_DATA_DIR` - where the cart database lives (default: `.basket`)
//! - `RUST_LOG` - tracing filter (default: `basket=warn`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};

use basket_catalog::ProductSort;

mod commands;

#[derive(Parser)]
#[command(name = "basket")]
#[command(author, version, about = "Basket command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// List catalog categories
    Categories,
    /// Manage the persistent cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, with optional search, category filter, and sorting
    List {
        /// Case-insensitive search over title and description
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category filter
        #[arg(short, long)]
        category: Option<String>,

        /// Sort order
        #[arg(long, value_enum)]
        sort: Option<SortKey>,

        /// Items per page
        #[arg(long, default_value_t = 10)]
        page_size: usize,

        /// Number of pages to show
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Show one product in full
    Show {
        /// Product id
        id: u64,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add a product to the cart by id
    Add {
        /// Product id
        id: u64,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: u64,
    },
    /// Set the quantity for a product already in the cart (0 removes it)
    Set {
        /// Product id
        id: u64,

        /// New quantity
        quantity: u32,
    },
    /// Empty the cart and delete the persisted snapshot
    Clear,
}

/// Sort order for `products list`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortKey {
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Title, lexical order
    Title,
    /// Best rated first
    Rating,
}

impl From<SortKey> for ProductSort {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::PriceAsc => Self::PriceAscending,
            SortKey::PriceDesc => Self::PriceDescending,
            SortKey::Title => Self::Title,
            SortKey::Rating => Self::Rating,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; default to warnings from our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "basket=warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List {
                search,
                category,
                sort,
                page_size,
                pages,
            } => {
                commands::products::list(
                    search.as_deref(),
                    category.as_deref(),
                    sort.map(Into::into),
                    page_size,
                    pages,
                )
                .await
            }
            ProductsAction::Show { id } => commands::products::show(id).await,
        },
        Commands::Categories => commands::products::categories().await,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(),
            CartAction::Add { id, quantity } => commands::cart::add(id, quantity).await,
            CartAction::Remove { id } => commands::cart::remove(id),
            CartAction::Set { id, quantity } => commands::cart::set(id, quantity),
            CartAction::Clear => commands::cart::clear(),
        },
    }
}
