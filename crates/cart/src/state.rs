//! In-memory cart record and its reducer.

use storecart_core::{PaymentMethod, ProductId, ShippingAddress};

use crate::action::CartAction;
use crate::item::CartItem;
use crate::pricing::{CartTotals, ShippingPolicy};

/// The cart record.
///
/// `items` holds at most one line per product id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    /// Line items in insertion order.
    pub items: Vec<CartItem>,
    /// Address to ship to, if one has been entered.
    pub shipping_address: Option<ShippingAddress>,
    /// Selected payment method, if any.
    pub payment_method: Option<PaymentMethod>,
    /// Derived amounts as of the last [`CartAction::CalculatePrices`].
    pub totals: CartTotals,
}

impl CartState {
    /// Apply one mutation.
    pub fn apply(&mut self, action: CartAction, policy: &ShippingPolicy) {
        match action {
            CartAction::AddToCart(item) => self.upsert(item),
            CartAction::RemoveFromCart(id) => self.items.retain(|item| item.id != id),
            CartAction::UpdateCartQuantity { id, quantity } => {
                if let Some(item) = self.find_mut(&id) {
                    item.quantity = quantity;
                }
            }
            CartAction::SaveShippingAddress(address) => {
                self.shipping_address = (!address.is_empty()).then_some(address);
            }
            CartAction::SavePaymentMethod(method) => self.payment_method = Some(method),
            CartAction::CalculatePrices => {
                self.totals = CartTotals::calculate(&self.items, policy);
            }
            CartAction::ClearCart => self.items.clear(),
        }
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Returns true if the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }

    fn upsert(&mut self, item: CartItem) {
        match self.find_mut(&item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }
}
