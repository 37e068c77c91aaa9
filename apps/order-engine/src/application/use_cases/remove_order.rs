//! Remove Order Use Case

use std::sync::Arc;

use crate::application::ports::{OrderStorePort, StoreError};
use crate::domain::shared::OrderId;

/// Deletes an order: first its detail records, then the header.
///
/// The detail wipe is fire-and-forget; its outcome is logged but never
/// checked, and the header delete runs regardless. A failed wipe followed
/// by a successful header delete therefore strands detail rows that no
/// header references.
pub struct RemoveOrderUseCase<S: OrderStorePort> {
    store: Arc<S>,
}

impl<S: OrderStorePort> RemoveOrderUseCase<S> {
    /// Create a new use case over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Delete the order's lines and header.
    pub async fn execute(&self, order_id: &OrderId) -> Result<(), StoreError> {
        if let Err(error) = self.store.delete_details(order_id).await {
            tracing::warn!(
                order_id = %order_id,
                error = %error,
                "detail wipe failed; deleting the header anyway"
            );
        }
        self.store.delete_order(order_id).await?;
        tracing::info!(order_id = %order_id, "order removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{NewOrderDetail, NewOrderHeader};
    use crate::domain::shared::{ClientId, Money, ProductId, Quantity};
    use crate::infrastructure::persistence::InMemoryOrderStore;
    use rust_decimal_macros::dec;

    async fn seed_order(store: &InMemoryOrderStore) -> OrderId {
        let order_id = store
            .create_order(&NewOrderHeader {
                client_id: ClientId::new("C1"),
                date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                subtotal: Money::new(dec!(20.00)),
                total: Money::new(dec!(20.00)),
            })
            .await
            .unwrap();
        store
            .create_detail(&NewOrderDetail {
                order_id: order_id.clone(),
                product_id: ProductId::new("P1"),
                quantity: Quantity::try_from(2).unwrap(),
                unit_price: Money::new(dec!(10.00)),
                line_total: Money::new(dec!(20.00)),
            })
            .await
            .unwrap();
        order_id
    }

    #[tokio::test]
    async fn removes_details_and_header() {
        let store = Arc::new(InMemoryOrderStore::new());
        let order_id = seed_order(&store).await;
        let use_case = RemoveOrderUseCase::new(Arc::clone(&store));

        use_case.execute(&order_id).await.unwrap();

        assert!(store.order(&order_id).is_none());
        assert!(store.details_for(&order_id).is_empty());
    }

    #[tokio::test]
    async fn failed_wipe_still_deletes_the_header() {
        let store = Arc::new(InMemoryOrderStore::new());
        let order_id = seed_order(&store).await;
        store.fail_delete_details();
        let use_case = RemoveOrderUseCase::new(Arc::clone(&store));

        use_case.execute(&order_id).await.unwrap();

        // Orphaned detail rows are the documented cost of the unchecked wipe.
        assert!(store.order(&order_id).is_none());
        assert_eq!(store.details_for(&order_id).len(), 1);
    }

    #[tokio::test]
    async fn failed_header_delete_is_reported() {
        let store = Arc::new(InMemoryOrderStore::new());
        let order_id = seed_order(&store).await;
        store.fail_delete_order();
        let use_case = RemoveOrderUseCase::new(Arc::clone(&store));

        let err = use_case.execute(&order_id).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected { .. }));
        assert!(store.order(&order_id).is_some());
    }
}
