//! The in-memory order draft (line item aggregator).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::CatalogSnapshot;
use crate::domain::composition::{DraftError, LineItem, OrderTotals};
use crate::domain::shared::{ClientId, ProductId, Quantity};

/// A not-yet-persisted order being composed by an operator.
///
/// Lines are kept in insertion order and are unique by product id: adding a
/// product that is already present merges into the existing line rather than
/// appending a duplicate, so the stock ceiling is always checked against the
/// cumulative requested quantity.
///
/// The draft is a plain value owned by one composition session. It performs
/// no I/O; persistence is the coordinator's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    client_id: Option<ClientId>,
    date: Option<NaiveDate>,
    lines: Vec<LineItem>,
}

impl OrderDraft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the customer for the order.
    pub fn set_client(&mut self, client_id: ClientId) {
        self.client_id = Some(client_id);
    }

    /// Set the order date.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    /// Get the selected customer, if any.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Get the order date, if set.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// The current line set, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Whether the draft has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `requested` units of a product, merging with any existing line.
    ///
    /// The unit price and description are captured from the snapshot at call
    /// time and not re-fetched later. If the cumulative quantity for the
    /// product would exceed the snapshot's available stock, the draft —
    /// including the existing line, if any — is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`DraftError::InvalidQuantity`] if `requested` is not positive
    /// - [`DraftError::UnknownProduct`] if the product is not in the snapshot
    /// - [`DraftError::StockExceeded`] if the stock ceiling would be crossed
    pub fn add_line(
        &mut self,
        catalog: &CatalogSnapshot,
        product_id: &ProductId,
        requested: i64,
    ) -> Result<(), DraftError> {
        let requested_quantity = Quantity::try_from_i64(requested)
            .map_err(|_| DraftError::InvalidQuantity { requested })?;

        let entry = catalog
            .entry(product_id)
            .ok_or_else(|| DraftError::UnknownProduct {
                product_id: product_id.clone(),
            })?;

        let existing = self
            .lines
            .iter()
            .position(|line| line.product_id() == product_id);

        // Cumulative check: merged quantity, not this add in isolation.
        let current: u64 = existing.map_or(0, |i| u64::from(self.lines[i].quantity().get()));
        let cumulative = current + u64::from(requested_quantity.get());

        if cumulative > u64::from(entry.available_quantity()) {
            return Err(DraftError::StockExceeded {
                product_id: product_id.clone(),
                available: entry.available_quantity(),
            });
        }

        // Checked above: cumulative <= available <= u32::MAX, and >= 1.
        let merged = Quantity::try_from_i64(i64::try_from(cumulative).unwrap_or(i64::MAX))
            .map_err(|_| DraftError::InvalidQuantity { requested })?;

        let line = LineItem::new(
            product_id.clone(),
            entry.description(),
            merged,
            entry.unit_price(),
        );

        match existing {
            Some(index) => self.lines[index] = line,
            None => self.lines.push(line),
        }
        Ok(())
    }

    /// Drop the line for a product, if present. A no-op otherwise.
    pub fn remove_line(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| line.product_id() != product_id);
    }

    /// Recompute subtotal and total from the current line set.
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::compute(&self.lines)
    }

    /// Insert a line rebuilt from persisted data, replacing any line with
    /// the same product id. Used when loading an existing order for edit;
    /// composition goes through [`OrderDraft::add_line`].
    pub(crate) fn push_line(&mut self, line: LineItem) {
        let product_id = line.product_id().clone();
        self.remove_line(&product_id);
        self.lines.push(line);
    }
}
