//! Load Catalog Use Case

use std::sync::Arc;

use crate::application::ports::{OrderStorePort, StoreError};
use crate::domain::catalog::{CatalogEntry, CatalogSnapshot};

/// Fetches the product list and freezes it into a composition-time
/// [`CatalogSnapshot`].
///
/// The snapshot exposes the sale price, not the purchase cost, and is the
/// only price source composition ever uses. It reflects stock as of this
/// fetch; later backend changes are invisible until a new snapshot is
/// loaded.
pub struct LoadCatalogUseCase<S: OrderStorePort> {
    store: Arc<S>,
}

impl<S: OrderStorePort> LoadCatalogUseCase<S> {
    /// Create a new use case over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch the catalog and build a snapshot.
    pub async fn execute(&self) -> Result<CatalogSnapshot, StoreError> {
        let products = self.store.list_products().await?;
        let entries = products
            .into_iter()
            .map(|product| {
                CatalogEntry::new(
                    product.product_id,
                    product.description,
                    product.price,
                    product.quantity,
                )
            })
            .collect();
        let snapshot = CatalogSnapshot::new(entries);
        tracing::debug!(products = snapshot.len(), "catalog snapshot loaded");
        Ok(snapshot)
    }
}
