//! Integration tests for the cart store backed by a JSON file.
//!
//! Each test opens a store, mutates it, then reloads a fresh store from the
//! same file to check what was persisted.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;

use storecart::{CartItem, CartStore, FileStorage, KeyValueStore, keys};
use storecart_core::{PaymentMethod, ShippingAddress};
use storecart_integration_tests::TempStorageFile;

fn open(file: &TempStorageFile) -> CartStore<FileStorage> {
    CartStore::load(FileStorage::new(file.path()))
}

fn item(id: &str, price: i64, quantity: u32) -> CartItem {
    CartItem::new(id, format!("Product {id}"), Decimal::from(price), quantity)
}

// =============================================================================
// Line Items
// =============================================================================

#[test]
fn test_items_survive_reload_in_order() {
    let file = TempStorageFile::new();
    let mut store = open(&file);
    store.add_to_cart(item("a", 10, 1));
    store.add_to_cart(item("b", 20, 2));
    store.add_to_cart(item("c", 30, 3));
    drop(store);

    let reloaded = open(&file);
    let ids: Vec<&str> = reloaded
        .state()
        .items
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_replace_keeps_position_after_reload() {
    let file = TempStorageFile::new();
    let mut store = open(&file);
    store.add_to_cart(item("a", 10, 1));
    store.add_to_cart(item("b", 20, 2));
    store.add_to_cart(item("a", 12, 4));
    drop(store);

    let reloaded = open(&file);
    let items = &reloaded.state().items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_str(), "a");
    assert_eq!(items[0].price, Decimal::from(12));
    assert_eq!(items[0].quantity, 4);
}

#[test]
fn test_remove_and_update_quantity_persist() {
    let file = TempStorageFile::new();
    let mut store = open(&file);
    store.add_to_cart(item("a", 10, 1));
    store.add_to_cart(item("b", 20, 2));
    store.remove_from_cart("a");
    store.remove_from_cart("not-in-cart");
    store.update_cart_quantity("b", 6);
    store.update_cart_quantity("not-in-cart", 6);
    drop(store);

    let reloaded = open(&file);
    assert_eq!(reloaded.state().items.len(), 1);
    assert_eq!(reloaded.state().items[0].quantity, 6);
}

#[test]
fn test_clear_cart_removes_stored_items() {
    let file = TempStorageFile::new();
    let mut store = open(&file);
    store.add_to_cart(item("a", 10, 1));
    store.save_payment_method(PaymentMethod::parse("PayPal").unwrap());
    store.clear_cart();

    let storage = FileStorage::new(file.path());
    assert_eq!(storage.get(keys::CART_ITEMS).unwrap(), None);
    assert_eq!(
        storage.get(keys::PAYMENT_METHOD).unwrap().as_deref(),
        Some("PayPal")
    );
}

// =============================================================================
// Checkout Details
// =============================================================================

#[test]
fn test_checkout_details_survive_reload() {
    let file = TempStorageFile::new();
    let address = ShippingAddress::new("1 Main St", "Springfield", "12345", "USA").unwrap();
    let mut store = open(&file);
    store.save_shipping_address(address.clone());
    store.save_payment_method(PaymentMethod::parse("Stripe").unwrap());
    drop(store);

    let reloaded = open(&file);
    assert_eq!(reloaded.state().shipping_address, Some(address));
    assert_eq!(
        reloaded
            .state()
            .payment_method
            .as_ref()
            .map(PaymentMethod::as_str),
        Some("Stripe")
    );
}

#[test]
fn test_storage_layout_matches_browser_keys() {
    let file = TempStorageFile::new();
    let mut store = open(&file);
    store.add_to_cart(item("a", 10, 1));
    store.save_shipping_address(
        ShippingAddress::new("1 Main St", "Springfield", "12345", "USA").unwrap(),
    );
    store.save_payment_method(PaymentMethod::parse("PayPal").unwrap());

    let raw = std::fs::read_to_string(file.path()).unwrap();
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&raw).unwrap();

    let items: serde_json::Value =
        serde_json::from_str(entries["cartItems"].as_str().unwrap()).unwrap();
    assert_eq!(items[0]["id"], "a");

    let address: serde_json::Value =
        serde_json::from_str(entries["shippingAddress"].as_str().unwrap()).unwrap();
    assert_eq!(address["postalCode"], "12345");

    assert_eq!(entries["paymentMethod"], "PayPal");
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_totals_recomputed_after_reload() {
    let file = TempStorageFile::new();
    let mut store = open(&file);
    store.add_to_cart(item("a", 60, 2));
    store.calculate_prices();
    assert_eq!(store.state().totals.total_price, Decimal::from(120));
    drop(store);

    let mut reloaded = open(&file);
    assert_eq!(reloaded.state().totals.total_price, Decimal::ZERO);

    reloaded.calculate_prices();
    assert_eq!(reloaded.state().totals.items_price, Decimal::from(120));
    assert_eq!(reloaded.state().totals.shipping_price, Decimal::ZERO);
    assert_eq!(reloaded.state().totals.total_price, Decimal::from(120));
}

#[test]
fn test_calculate_prices_leaves_file_untouched() {
    let file = TempStorageFile::new();
    let mut store = open(&file);
    store.add_to_cart(item("a", 25, 2));
    let before = std::fs::read_to_string(file.path()).unwrap();

    store.calculate_prices();
    store.calculate_prices();

    assert_eq!(std::fs::read_to_string(file.path()).unwrap(), before);
    assert_eq!(store.state().totals.shipping_price, Decimal::from(10));
    assert_eq!(store.state().totals.total_price, Decimal::from(60));
}
