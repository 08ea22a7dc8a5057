//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use storecart_core::ProductId;

/// A product entry in the cart with its unit price and quantity.
///
/// Display fields the cart does not interpret (brand, slug, ...) are kept in
/// [`CartItem::extra`] so they survive a round trip through storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product identifier. Unique within a cart.
    pub id: ProductId,
    /// Product name shown in the cart.
    #[serde(default)]
    pub name: String,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Number of units.
    pub quantity: u32,
    /// Units available, used by the UI to bound the quantity picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_in_stock: Option<u32>,
    /// Any other display fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartItem {
    /// Create a line item with no image, stock count, or extra fields.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
            price,
            quantity,
            count_in_stock: None,
            extra: Map::new(),
        }
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the stock count.
    #[must_use]
    pub const fn with_count_in_stock(mut self, count: u32) -> Self {
        self.count_in_stock = Some(count);
        self
    }

    /// `price × quantity`, saturating on overflow.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}
