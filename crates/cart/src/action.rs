//! Cart mutations as data.

use storecart_core::{PaymentMethod, ProductId, ShippingAddress};

use crate::item::CartItem;

/// A named cart mutation.
///
/// Applied to a [`crate::CartState`] by [`crate::CartState::apply`] and to a
/// persisted cart by [`crate::CartStore::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Insert a line item, replacing any existing line with the same id in place.
    AddToCart(CartItem),
    /// Drop the line item with this id.
    RemoveFromCart(ProductId),
    /// Set the quantity of an existing line item.
    UpdateCartQuantity {
        /// Line item to update.
        id: ProductId,
        /// New quantity.
        quantity: u32,
    },
    /// Overwrite the shipping address.
    SaveShippingAddress(ShippingAddress),
    /// Overwrite the payment method.
    SavePaymentMethod(PaymentMethod),
    /// Recompute derived totals from the current items.
    CalculatePrices,
    /// Remove every line item.
    ClearCart,
}

/// What a [`CartAction`] requires of the durable store afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    /// Write the full item list.
    Items,
    /// Delete the item list entry.
    ClearItems,
    /// Write the shipping address.
    ShippingAddress,
    /// Write the payment method.
    PaymentMethod,
    /// Nothing to write.
    Nothing,
}

impl CartAction {
    /// Storage effect of this action.
    #[must_use]
    pub const fn persist(&self) -> Persist {
        match self {
            Self::AddToCart(_) | Self::RemoveFromCart(_) | Self::UpdateCartQuantity { .. } => {
                Persist::Items
            }
            Self::SaveShippingAddress(_) => Persist::ShippingAddress,
            Self::SavePaymentMethod(_) => Persist::PaymentMethod,
            Self::CalculatePrices => Persist::Nothing,
            Self::ClearCart => Persist::ClearItems,
        }
    }

    /// Action name used in log output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "add_to_cart",
            Self::RemoveFromCart(_) => "remove_from_cart",
            Self::UpdateCartQuantity { .. } => "update_cart_quantity",
            Self::SaveShippingAddress(_) => "save_shipping_address",
            Self::SavePaymentMethod(_) => "save_payment_method",
            Self::CalculatePrices => "calculate_prices",
            Self::ClearCart => "clear_cart",
        }
    }
}
