//! Storecart - Shopping cart state for the storefront.
//!
//! Holds cart line items, the shipping address, the selected payment method,
//! and derived price totals. Every mutation is mirrored to a durable
//! key-value store so the cart survives restarts.
//!
//! # Architecture
//!
//! - [`CartState`] is a plain record mutated by a reducer ([`CartState::apply`])
//!   over [`CartAction`] values. It performs no I/O.
//! - [`CartStore`] owns a state and a [`KeyValueStore`], loads the state at
//!   construction (recovering from corrupt entries), and persists the keys
//!   each action touches.
//! - [`ShippingPolicy`] and [`CartTotals`] implement the price aggregation.
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use storecart::{CartItem, CartStore, MemoryStorage};
//!
//! let mut cart = CartStore::load(MemoryStorage::new());
//! cart.add_to_cart(CartItem::new("p-1", "Pineapple", Decimal::from(60), 2));
//! cart.calculate_prices();
//!
//! assert_eq!(cart.state().totals.items_price, Decimal::from(120));
//! assert_eq!(cart.state().totals.shipping_price, Decimal::ZERO);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod action;
pub mod item;
pub mod pricing;
pub mod state;
pub mod storage;
pub mod store;

pub use action::CartAction;
pub use item::CartItem;
pub use pricing::{CartTotals, ShippingPolicy};
pub use state::CartState;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError, keys};
pub use store::CartStore;
