//! Point-in-time catalog snapshot used during order composition.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, ProductId};

/// A single product as seen at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    product_id: ProductId,
    description: String,
    unit_price: Money,
    available_quantity: u32,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        description: impl Into<String>,
        unit_price: Money,
        available_quantity: u32,
    ) -> Self {
        Self {
            product_id,
            description: description.into(),
            unit_price,
            available_quantity,
        }
    }

    /// Get the product identifier.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Get the product description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the unit price at snapshot time.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Get the available stock at snapshot time (the stock ceiling).
    #[must_use]
    pub const fn available_quantity(&self) -> u32 {
        self.available_quantity
    }
}

/// The product catalog as fetched once per composition session.
///
/// Stock checks during composition run against this snapshot only; it is
/// never refreshed mid-session and never re-validated at commit time, so
/// concurrent sessions can oversell relative to true stock. That limitation
/// is inherited from the backend, which offers no reservation mechanism.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
    by_product: HashMap<ProductId, usize>,
}

impl CatalogSnapshot {
    /// Build a snapshot from a list of entries.
    ///
    /// Entries with a blank product id are dropped, mirroring what the
    /// backend has been observed to return. On duplicate ids the first
    /// entry wins.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut by_product = HashMap::new();
        for entry in entries {
            if entry.product_id.is_blank() {
                continue;
            }
            if by_product.contains_key(&entry.product_id) {
                continue;
            }
            by_product.insert(entry.product_id.clone(), kept.len());
            kept.push(entry);
        }
        Self {
            entries: kept,
            by_product,
        }
    }

    /// Look up an entry by product id.
    #[must_use]
    pub fn entry(&self, product_id: &ProductId) -> Option<&CatalogEntry> {
        self.by_product
            .get(product_id)
            .map(|index| &self.entries[*index])
    }

    /// All entries, in the order the backend returned them.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of products in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(id: &str, price: &str, stock: u32) -> CatalogEntry {
        CatalogEntry::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::new(price.parse().unwrap()),
            stock,
        )
    }

    #[test]
    fn snapshot_lookup() {
        let snapshot = CatalogSnapshot::new(vec![entry("P1", "10.00", 5), entry("P2", "3.50", 2)]);

        assert_eq!(snapshot.len(), 2);
        let found = snapshot.entry(&ProductId::new("P2")).unwrap();
        assert_eq!(found.unit_price().amount(), dec!(3.50));
        assert_eq!(found.available_quantity(), 2);
        assert!(snapshot.entry(&ProductId::new("P9")).is_none());
    }

    #[test]
    fn snapshot_drops_blank_product_ids() {
        let snapshot = CatalogSnapshot::new(vec![entry("", "1.00", 1), entry("P1", "10.00", 5)]);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.entry(&ProductId::new("")).is_none());
    }

    #[test]
    fn snapshot_first_duplicate_wins() {
        let snapshot = CatalogSnapshot::new(vec![entry("P1", "10.00", 5), entry("P1", "9.00", 3)]);

        assert_eq!(snapshot.len(), 1);
        let found = snapshot.entry(&ProductId::new("P1")).unwrap();
        assert_eq!(found.unit_price().amount(), dec!(10.00));
    }

    #[test]
    fn snapshot_preserves_backend_order() {
        let snapshot = CatalogSnapshot::new(vec![entry("P2", "1.00", 1), entry("P1", "2.00", 1)]);

        let ids: Vec<&str> = snapshot
            .entries()
            .iter()
            .map(|e| e.product_id().as_str())
            .collect();
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = CatalogSnapshot::default();
        assert!(snapshot.is_empty());
    }
}
