//! Durable key-value storage for the cart.
//!
//! The cart treats storage as an opaque string-to-string map, the same shape
//! as browser local storage. Structured values are JSON-encoded by the caller.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage keys used by the cart.
pub mod keys {
    /// JSON array of cart line items.
    pub const CART_ITEMS: &str = "cartItems";

    /// JSON object with the shipping address.
    pub const SHIPPING_ADDRESS: &str = "shippingAddress";

    /// Plain (not JSON-encoded) payment method name.
    pub const PAYMENT_METHOD: &str = "paymentMethod";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid JSON.
    #[error("Storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing file parsed but is not an object of string values.
    #[error("Storage file {0} is not a JSON object of strings")]
    NotAnObject(String),
}

/// A string key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
