//! Load Order Use Case (edit-session bootstrap)

use std::sync::Arc;

use crate::application::ports::{OrderStorePort, StoreError};
use crate::domain::catalog::CatalogSnapshot;
use crate::domain::composition::{LineItem, OrderDraft};
use crate::domain::shared::OrderId;

/// Rebuilds an editable draft from a persisted order: one header fetch,
/// one detail listing, then line reconstruction against a catalog
/// snapshot.
///
/// Lines keep their persisted quantity and unit price even when the
/// catalog has moved on; only the description is resolved from the
/// snapshot, falling back to `Producto {id}` for products no longer
/// listed.
pub struct LoadOrderUseCase<S: OrderStorePort> {
    store: Arc<S>,
}

impl<S: OrderStorePort> LoadOrderUseCase<S> {
    /// Create a new use case over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch an order and rebuild its draft.
    pub async fn execute(
        &self,
        order_id: &OrderId,
        catalog: &CatalogSnapshot,
    ) -> Result<OrderDraft, StoreError> {
        let header = self.store.get_order(order_id).await?;
        let details = self.store.list_details(order_id).await?;

        let mut draft = OrderDraft::new();
        draft.set_client(header.client.client_id);
        draft.set_date(header.date);

        for detail in details {
            let description = catalog.entry(&detail.product_id).map_or_else(
                || format!("Producto {}", detail.product_id),
                |entry| entry.description().to_string(),
            );
            draft.push_line(LineItem::new(
                detail.product_id,
                description,
                detail.quantity,
                detail.unit_price,
            ));
        }

        tracing::debug!(order_id = %order_id, lines = draft.lines().len(), "order loaded for edit");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NewOrderDetail, NewOrderHeader};
    use crate::domain::catalog::CatalogEntry;
    use crate::domain::shared::{ClientId, Money, ProductId, Quantity};
    use crate::infrastructure::persistence::InMemoryOrderStore;
    use rust_decimal_macros::dec;

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(vec![CatalogEntry::new(
            ProductId::new("P1"),
            "Widget",
            Money::new(dec!(12.00)),
            10,
        )])
    }

    async fn seed_order(store: &InMemoryOrderStore, lines: &[(&str, u32)]) -> OrderId {
        let order_id = store
            .create_order(&NewOrderHeader {
                client_id: ClientId::new("C1"),
                date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                subtotal: Money::new(dec!(20.00)),
                total: Money::new(dec!(20.00)),
            })
            .await
            .unwrap();
        for (id, quantity) in lines {
            store
                .create_detail(&NewOrderDetail {
                    order_id: order_id.clone(),
                    product_id: ProductId::new(*id),
                    quantity: Quantity::try_from(*quantity).unwrap(),
                    unit_price: Money::new(dec!(10.00)),
                    line_total: Money::new(dec!(10.00) * rust_decimal::Decimal::from(*quantity)),
                })
                .await
                .unwrap();
        }
        order_id
    }

    #[tokio::test]
    async fn rebuilds_client_date_and_lines() {
        let store = Arc::new(InMemoryOrderStore::new());
        let order_id = seed_order(&store, &[("P1", 2)]).await;
        let use_case = LoadOrderUseCase::new(Arc::clone(&store));

        let draft = use_case.execute(&order_id, &catalog()).await.unwrap();

        assert_eq!(draft.client_id().unwrap().as_str(), "C1");
        assert!(draft.date().is_some());
        assert_eq!(draft.lines().len(), 1);

        let line = &draft.lines()[0];
        assert_eq!(line.description(), "Widget");
        assert_eq!(line.quantity().get(), 2);
        // Persisted price wins over the snapshot's newer one.
        assert_eq!(line.unit_price().amount(), dec!(10.00));
        assert_eq!(line.line_total().amount(), dec!(20.00));
    }

    #[tokio::test]
    async fn delisted_product_gets_fallback_description() {
        let store = Arc::new(InMemoryOrderStore::new());
        let order_id = seed_order(&store, &[("P9", 1)]).await;
        let use_case = LoadOrderUseCase::new(Arc::clone(&store));

        let draft = use_case.execute(&order_id, &catalog()).await.unwrap();
        assert_eq!(draft.lines()[0].description(), "Producto P9");
    }

    #[tokio::test]
    async fn missing_order_is_an_error() {
        let store = Arc::new(InMemoryOrderStore::new());
        let use_case = LoadOrderUseCase::new(Arc::clone(&store));

        let err = use_case
            .execute(&OrderId::new("nope"), &catalog())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Rejected { status: 404, .. }));
    }
}
