//! Shipping address entered at checkout.

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`ShippingAddress`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShippingAddressError {
    /// A required field is empty or whitespace.
    #[error("shipping address {0} cannot be empty")]
    MissingField(&'static str),
}

/// A postal shipping address.
///
/// Every field defaults to an empty string when absent from stored JSON, so
/// a stored `{}` decodes to an empty address rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingAddress {
    /// Street address line.
    pub address: String,
    /// City or locality.
    pub city: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// Country name.
    pub country: String,
}

impl ShippingAddress {
    /// Build a complete address, trimming each field.
    ///
    /// # Errors
    ///
    /// Returns [`ShippingAddressError::MissingField`] naming the first field
    /// that is empty after trimming.
    pub fn new(
        address: &str,
        city: &str,
        postal_code: &str,
        country: &str,
    ) -> Result<Self, ShippingAddressError> {
        let fields = [
            ("address", address),
            ("city", city),
            ("postal code", postal_code),
            ("country", country),
        ];
        if let Some((name, _)) = fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ShippingAddressError::MissingField(name));
        }

        Ok(Self {
            address: address.trim().to_owned(),
            city: city.trim().to_owned(),
            postal_code: postal_code.trim().to_owned(),
            country: country.trim().to_owned(),
        })
    }

    /// Returns true if every field is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.address,
            &self.city,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .all(|field| field.trim().is_empty())
    }

    /// Single-line rendering, skipping blank fields.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            self.address.as_str(),
            self.city.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}
