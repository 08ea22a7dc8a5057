//! Integration tests for the storefront cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storecart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart store against the file backend
//! - `cart_recovery` - Loading carts from damaged storage
//!
//! Helpers for throwaway storage files live here.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

/// A storage file under a unique temp directory, removed on drop.
#[derive(Debug)]
pub struct TempStorageFile {
    dir: PathBuf,
    path: PathBuf,
}

impl TempStorageFile {
    /// Reserve a fresh path. Nothing is created until the store writes.
    #[must_use]
    pub fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("storecart-it-{}", uuid::Uuid::new_v4()));
        let path = dir.join("storage.json");
        Self { dir, path }
    }

    /// Path of the storage file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write raw file contents, creating the directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn write_raw(&self, contents: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&self.path, contents)
    }
}

impl Default for TempStorageFile {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempStorageFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
