//! Errors raised while composing an order draft.

use thiserror::Error;

use crate::domain::shared::ProductId;

/// Errors from draft mutation.
///
/// All of these are resolved locally during composition and never reach the
/// network layer. A failed `add_line` leaves the draft untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The requested quantity was not a positive whole number.
    #[error("quantity must be a positive whole number, got {requested}")]
    InvalidQuantity {
        /// The raw requested value.
        requested: i64,
    },

    /// The product id is not present in the catalog snapshot.
    #[error("product {product_id} is not in the catalog")]
    UnknownProduct {
        /// The unknown product id.
        product_id: ProductId,
    },

    /// The cumulative quantity for the product would exceed available stock.
    #[error("only {available} units of product {product_id} are available")]
    StockExceeded {
        /// The product whose stock ceiling was hit.
        product_id: ProductId,
        /// The snapshot's available quantity for the product.
        available: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_exceeded_display_names_available_units() {
        let err = DraftError::StockExceeded {
            product_id: ProductId::new("P1"),
            available: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("4 units"));
        assert!(msg.contains("P1"));
    }

    #[test]
    fn invalid_quantity_display() {
        let err = DraftError::InvalidQuantity { requested: -2 };
        assert!(format!("{err}").contains("-2"));
    }
}
