//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_PATH` - JSON file holding the cart (default: .cart/storage.json)
//! - `CART_FREE_SHIPPING_THRESHOLD` - Subtotal above which shipping is free (default: 100)
//! - `CART_FLAT_SHIPPING_FEE` - Shipping fee at or below the threshold (default: 10)
//! - `CART_CURRENCY` - ISO 4217 code used when printing amounts (default: USD)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use storecart::ShippingPolicy;
use storecart_core::CurrencyCode;

const DEFAULT_STORAGE_PATH: &str = ".cart/storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart CLI configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// File backing the cart storage
    pub storage_path: PathBuf,
    /// Shipping fee rule used for totals
    pub shipping: ShippingPolicy,
    /// Currency used when printing amounts
    pub currency: CurrencyCode,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_path = lookup("CART_STORAGE_PATH")
            .filter(|path| !path.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from);

        let defaults = ShippingPolicy::default();
        let free_shipping_threshold = parse_amount(
            &lookup,
            "CART_FREE_SHIPPING_THRESHOLD",
            defaults.free_shipping_threshold,
        )?;
        let flat_fee = parse_amount(&lookup, "CART_FLAT_SHIPPING_FEE", defaults.flat_fee)?;

        let currency = match lookup("CART_CURRENCY") {
            Some(raw) => CurrencyCode::from_str(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("CART_CURRENCY".to_string(), e.to_string())
            })?,
            None => CurrencyCode::default(),
        };

        Ok(Self {
            storage_path,
            shipping: ShippingPolicy::new(free_shipping_threshold, flat_fee),
            currency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a non-negative decimal amount, falling back to `default` when unset.
fn parse_amount(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    let amount = Decimal::from_str(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if amount.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "amount cannot be negative".to_string(),
        ));
    }

    Ok(amount)
}
