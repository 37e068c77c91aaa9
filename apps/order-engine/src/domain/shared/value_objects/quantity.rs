//! Quantity value object for order line counts.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A strictly positive whole-unit quantity.
///
/// The backend deals only in whole units, so this is an integer rather than
/// a decimal. Zero and negative values cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity from raw user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in `1..=u32::MAX`.
    pub fn try_from_i64(value: i64) -> Result<Self, DomainError> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v > 0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: format!("must be a positive whole number, got {value}"),
            })
    }

    /// Get the inner value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from_i64(i64::from(value))
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_accepts_positive() {
        let q = Quantity::try_from_i64(3).unwrap();
        assert_eq!(q.get(), 3);
        assert_eq!(format!("{q}"), "3");
    }

    #[test]
    fn quantity_rejects_zero() {
        assert!(Quantity::try_from_i64(0).is_err());
    }

    #[test]
    fn quantity_rejects_negative() {
        assert!(Quantity::try_from_i64(-4).is_err());
    }

    #[test]
    fn quantity_rejects_overflow() {
        assert!(Quantity::try_from_i64(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn quantity_serde_rejects_zero() {
        let parsed: Result<Quantity, _> = serde_json::from_str("0");
        assert!(parsed.is_err());

        let parsed: Quantity = serde_json::from_str("2").unwrap();
        assert_eq!(parsed.get(), 2);
    }

    #[test]
    fn quantity_ordering() {
        let a = Quantity::try_from_i64(2).unwrap();
        let b = Quantity::try_from_i64(5).unwrap();
        assert!(a < b);
    }
}
