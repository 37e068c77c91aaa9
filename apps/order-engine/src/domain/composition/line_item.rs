//! A single line of an order draft.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, ProductId, Quantity};

/// One product line in a draft.
///
/// `line_total` is always `quantity * unit_price`; it is computed on
/// construction and lines are replaced wholesale on every mutation, so the
/// invariant cannot drift. Callers never set the total directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    product_id: ProductId,
    description: String,
    quantity: Quantity,
    unit_price: Money,
    line_total: Money,
}

impl LineItem {
    /// Create a line, deriving the total from quantity and unit price.
    pub(crate) fn new(
        product_id: ProductId,
        description: impl Into<String>,
        quantity: Quantity,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id,
            description: description.into(),
            quantity,
            unit_price,
            line_total: unit_price * quantity.get(),
        }
    }

    /// Get the product identifier.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Get the product description captured at add time.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get the unit price captured from the catalog snapshot at add time.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Get the derived line total.
    #[must_use]
    pub const fn line_total(&self) -> Money {
        self.line_total
    }
}
