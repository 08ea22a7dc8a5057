//! Payment method selection.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PaymentMethod`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethodError {
    /// The input string is empty or whitespace.
    #[error("payment method cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("payment method must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The payment method chosen at checkout (e.g. `PayPal`, `Stripe`).
///
/// Stored as a plain string; the cart does not interpret it.
///
/// ## Examples
///
/// ```
/// use storecart_core::PaymentMethod;
///
/// assert_eq!(PaymentMethod::parse(" PayPal ").unwrap().as_str(), "PayPal");
/// assert!(PaymentMethod::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PaymentMethod(String);

impl PaymentMethod {
    /// Maximum length of a payment method name.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `PaymentMethod`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, PaymentMethodError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PaymentMethodError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(PaymentMethodError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Accept a previously saved value, trimming whitespace.
    ///
    /// Only blank values are rejected; the length limit applies to new input
    /// through [`Self::parse`].
    #[must_use]
    pub fn from_stored(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    /// Returns the payment method as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = PaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PaymentMethod {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let method = PaymentMethod::parse("  Stripe\n").unwrap();
        assert_eq!(method.as_str(), "Stripe");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PaymentMethod::parse(""), Err(PaymentMethodError::Empty));
        assert_eq!(PaymentMethod::parse(" \t "), Err(PaymentMethodError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "x".repeat(PaymentMethod::MAX_LENGTH + 1);
        assert!(matches!(
            PaymentMethod::parse(&long),
            Err(PaymentMethodError::TooLong { .. })
        ));
    }

    #[test]
    fn test_from_stored_skips_length_limit() {
        let long = "x".repeat(PaymentMethod::MAX_LENGTH + 3);
        assert_eq!(PaymentMethod::from_stored(&long).unwrap().as_str(), long);
        assert_eq!(PaymentMethod::from_stored("  "), None);
    }

    #[test]
    fn test_display() {
        let method: PaymentMethod = "PayPal".parse().unwrap();
        assert_eq!(format!("{method}"), "PayPal");
    }
}
