//! Storecart CLI - Inspect and edit a persisted shopping cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart with recalculated totals
//! cart-cli show
//!
//! # Add (or replace) a line item
//! cart-cli add --id p-1 --name "Pineapple" --price 4.99 --quantity 3
//!
//! # Change a quantity, remove a line, or empty the cart
//! cart-cli quantity p-1 5
//! cart-cli remove p-1
//! cart-cli clear
//!
//! # Checkout details
//! cart-cli ship --address "1 Main St" --city Springfield --postal-code 12345 --country USA
//! cart-cli pay PayPal
//! ```
//!
//! # Commands
//!
//! - `show` - Print items and totals
//! - `add` / `remove` / `quantity` / `clear` - Edit line items
//! - `ship` / `pay` - Save checkout details
//!
//! Every command prints the resulting cart. See the `config` module for environment
//! variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storecart::{CartStore, FileStorage};

mod commands;
mod config;

use commands::cart::NewItem;
use config::CartConfig;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(author, version, about = "Storefront cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the cart with recalculated totals
    Show,
    /// Add an item, replacing any line with the same id
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Unit price
        #[arg(short, long)]
        price: Decimal,

        /// Number of units
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        quantity: u32,

        /// Product image URL
        #[arg(long)]
        image: Option<String>,

        /// Units in stock
        #[arg(long)]
        count_in_stock: Option<u32>,
    },
    /// Remove an item
    Remove {
        /// Product id
        id: String,
    },
    /// Set the quantity of an item already in the cart
    Quantity {
        /// Product id
        id: String,

        /// New quantity
        quantity: u32,
    },
    /// Save the shipping address
    Ship {
        /// Street address
        #[arg(long)]
        address: String,

        /// City
        #[arg(long)]
        city: String,

        /// Postal code
        #[arg(long)]
        postal_code: String,

        /// Country
        #[arg(long)]
        country: String,
    },
    /// Save the payment method
    Pay {
        /// Payment method name (e.g. `PayPal`)
        method: String,
    },
    /// Remove every item
    Clear,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storecart_cli=info,storecart=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    tracing::debug!(path = %config.storage_path.display(), "Opening cart storage");

    let storage = FileStorage::new(&config.storage_path);
    let mut store = CartStore::load_with_policy(storage, config.shipping);

    match cli.command {
        Commands::Show => {}
        Commands::Add {
            id,
            name,
            price,
            quantity,
            image,
            count_in_stock,
        } => commands::cart::add(
            &mut store,
            NewItem {
                id,
                name,
                price,
                quantity,
                image,
                count_in_stock,
            },
        )?,
        Commands::Remove { id } => commands::cart::remove(&mut store, &id),
        Commands::Quantity { id, quantity } => {
            commands::cart::set_quantity(&mut store, &id, quantity);
        }
        Commands::Ship {
            address,
            city,
            postal_code,
            country,
        } => commands::cart::ship(&mut store, &address, &city, &postal_code, &country)?,
        Commands::Pay { method } => commands::cart::pay(&mut store, &method)?,
        Commands::Clear => commands::cart::clear(&mut store),
    }

    commands::cart::show(&mut store, config.currency);
    Ok(())
}
