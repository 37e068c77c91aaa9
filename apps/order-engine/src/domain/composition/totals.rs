//! Derived order totals.

use serde::{Deserialize, Serialize};

use crate::domain::composition::LineItem;
use crate::domain::shared::Money;

/// Subtotal and total derived from a draft's line set.
///
/// This backend has no tax or discount computation, so `total == subtotal`
/// always. That is a business rule of the system, not a gap; both fields
/// still travel separately on the wire (`subTotal` / `totalVenta`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    subtotal: Money,
    total: Money,
}

impl OrderTotals {
    /// Recompute totals from a line set.
    ///
    /// Always derived on demand, never cached incrementally, so the totals
    /// cannot drift from the lines they describe.
    #[must_use]
    pub fn compute(lines: &[LineItem]) -> Self {
        let subtotal: Money = lines.iter().map(LineItem::line_total).sum();
        Self {
            subtotal,
            total: subtotal,
        }
    }

    /// Get the subtotal.
    #[must_use]
    pub const fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Get the total. Equal to the subtotal by business rule.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{ProductId, Quantity};
    use rust_decimal_macros::dec;

    fn line(id: &str, quantity: i64, price: rust_decimal::Decimal) -> LineItem {
        LineItem::new(
            ProductId::new(id),
            format!("Product {id}"),
            Quantity::try_from_i64(quantity).unwrap(),
            Money::new(price),
        )
    }

    #[test]
    fn totals_sum_line_totals() {
        let lines = vec![line("P1", 2, dec!(10.00)), line("P2", 1, dec!(5.25))];

        let totals = OrderTotals::compute(&lines);
        assert_eq!(totals.subtotal().amount(), dec!(25.25));
    }

    #[test]
    fn total_equals_subtotal() {
        let lines = vec![line("P1", 3, dec!(7.00))];

        let totals = OrderTotals::compute(&lines);
        assert_eq!(totals.total(), totals.subtotal());
    }

    #[test]
    fn empty_line_set_totals_zero() {
        let totals = OrderTotals::compute(&[]);
        assert!(totals.subtotal().is_zero());
        assert!(totals.total().is_zero());
    }
}
