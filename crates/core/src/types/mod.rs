//! Core types for the storefront cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod id;
pub mod payment;
pub mod price;

pub use address::{ShippingAddress, ShippingAddressError};
pub use id::*;
pub use payment::{PaymentMethod, PaymentMethodError};
pub use price::{CurrencyCode, Price, UnknownCurrency};
