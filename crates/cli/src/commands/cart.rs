//! Cart commands.
//!
//! Each command applies one operation to the loaded cart, recalculates the
//! totals, and logs a summary.
//!
//! # Usage
//!
//! ```bash
//! cart-cli add --id p-1 --name "Pineapple" --price 4.99 --quantity 3
//! cart-cli quantity p-1 5
//! cart-cli ship --address "1 Main St" --city Springfield --postal-code 12345 --country USA
//! cart-cli pay PayPal
//! cart-cli show
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

use storecart::{CartItem, CartState, CartStore, KeyValueStore};
use storecart_core::{
    CurrencyCode, PaymentMethod, PaymentMethodError, Price, ShippingAddress,
    ShippingAddressError,
};

/// Errors raised while validating command input.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Unit price below zero.
    #[error("Price cannot be negative: {0}")]
    NegativePrice(Decimal),

    /// Shipping address is incomplete.
    #[error("Invalid shipping address: {0}")]
    Address(#[from] ShippingAddressError),

    /// Payment method is blank or too long.
    #[error("Invalid payment method: {0}")]
    PaymentMethod(#[from] PaymentMethodError),
}

/// Fields for a new line item.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image: Option<String>,
    pub count_in_stock: Option<u32>,
}

/// Add or replace a line item.
///
/// # Errors
///
/// Returns an error if the price is negative.
pub fn add<S: KeyValueStore>(
    store: &mut CartStore<S>,
    item: NewItem,
) -> Result<(), CartCommandError> {
    if item.price.is_sign_negative() && !item.price.is_zero() {
        return Err(CartCommandError::NegativePrice(item.price));
    }

    let replacing = store.state().find(&item.id.as_str().into()).is_some();
    let mut line = CartItem::new(item.id, item.name, item.price, item.quantity);
    line.image = item.image;
    line.count_in_stock = item.count_in_stock;

    info!(id = %line.id, replacing, "Adding item to cart");
    store.add_to_cart(line);
    Ok(())
}

/// Remove a line item.
pub fn remove<S: KeyValueStore>(store: &mut CartStore<S>, id: &str) {
    if store.state().find(&id.into()).is_none() {
        info!(id, "Item not in cart");
    }
    store.remove_from_cart(id);
}

/// Change the quantity of a line item.
pub fn set_quantity<S: KeyValueStore>(store: &mut CartStore<S>, id: &str, quantity: u32) {
    if store.state().find(&id.into()).is_none() {
        info!(id, "Item not in cart");
    }
    store.update_cart_quantity(id, quantity);
}

/// Save the shipping address.
///
/// # Errors
///
/// Returns an error if any address field is blank.
pub fn ship<S: KeyValueStore>(
    store: &mut CartStore<S>,
    address: &str,
    city: &str,
    postal_code: &str,
    country: &str,
) -> Result<(), CartCommandError> {
    let address = ShippingAddress::new(address, city, postal_code, country)?;
    store.save_shipping_address(address);
    Ok(())
}

/// Save the payment method.
///
/// # Errors
///
/// Returns an error if the method is blank or too long.
pub fn pay<S: KeyValueStore>(
    store: &mut CartStore<S>,
    method: &str,
) -> Result<(), CartCommandError> {
    let method = PaymentMethod::parse(method)?;
    store.save_payment_method(method);
    Ok(())
}

/// Empty the cart.
pub fn clear<S: KeyValueStore>(store: &mut CartStore<S>) {
    store.clear_cart();
}

/// Recalculate totals and log the cart.
pub fn show<S: KeyValueStore>(store: &mut CartStore<S>, currency: CurrencyCode) {
    store.calculate_prices();
    for line in summary(store.state(), currency) {
        info!("{line}");
    }
}

/// Render the cart as display lines.
pub fn summary(state: &CartState, currency: CurrencyCode) -> Vec<String> {
    let money = |amount: Decimal| Price::new(amount, currency).display();
    let mut lines = Vec::with_capacity(state.items.len() + 6);

    if state.is_empty() {
        lines.push("Cart is empty".to_string());
    }
    for item in &state.items {
        lines.push(format!(
            "{} x{} {} @ {} = {}",
            item.id,
            item.quantity,
            item.name,
            money(item.price),
            money(item.line_total())
        ));
    }

    lines.push(format!("Items: {}", state.item_count()));
    lines.push(format!("Items price: {}", money(state.totals.items_price)));
    lines.push(format!("Shipping: {}", money(state.totals.shipping_price)));
    lines.push(format!("Total: {}", money(state.totals.total_price)));
    lines.push(format!(
        "Ship to: {}",
        state
            .shipping_address
            .as_ref()
            .map_or_else(|| "-".to_string(), ShippingAddress::one_line)
    ));
    lines.push(format!(
        "Payment: {}",
        state
            .payment_method
            .as_ref()
            .map_or("-", PaymentMethod::as_str)
    ));

    lines
}
