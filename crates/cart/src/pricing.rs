//! Price aggregation and the shipping fee rule.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::item::CartItem;

/// Orders above this subtotal ship free.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Flat shipping fee charged at or below the threshold.
pub const DEFAULT_FLAT_SHIPPING_FEE: Decimal = Decimal::TEN;

/// Flat-fee shipping with a free-shipping threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals strictly greater than this ship free.
    pub free_shipping_threshold: Decimal,
    /// Fee charged otherwise.
    pub flat_fee: Decimal,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            flat_fee: DEFAULT_FLAT_SHIPPING_FEE,
        }
    }
}

impl ShippingPolicy {
    /// Create a policy.
    #[must_use]
    pub const fn new(free_shipping_threshold: Decimal, flat_fee: Decimal) -> Self {
        Self {
            free_shipping_threshold,
            flat_fee,
        }
    }

    /// Shipping price for a given items subtotal.
    #[must_use]
    pub fn shipping_for(&self, items_price: Decimal) -> Decimal {
        if items_price > self.free_shipping_threshold {
            Decimal::ZERO
        } else {
            self.flat_fee
        }
    }
}

/// Derived cart amounts, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of `price × quantity` over all items.
    pub items_price: Decimal,
    /// Shipping fee under the active policy.
    pub shipping_price: Decimal,
    /// `items_price + shipping_price`.
    pub total_price: Decimal,
}

impl CartTotals {
    /// Aggregate line items under a shipping policy.
    #[must_use]
    pub fn calculate(items: &[CartItem], policy: &ShippingPolicy) -> Self {
        let items_price = round_cents(
            items
                .iter()
                .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.line_total())),
        );
        let shipping_price = round_cents(policy.shipping_for(items_price));
        let total_price = round_cents(items_price.saturating_add(shipping_price));

        Self {
            items_price,
            shipping_price,
            total_price,
        }
    }
}

fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
