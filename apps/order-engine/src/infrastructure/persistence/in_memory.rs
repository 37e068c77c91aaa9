//! In-memory order store for testing.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{
    Client, ClientRef, NewOrderDetail, NewOrderHeader, OrderStorePort, PersistedDetail,
    PersistedOrder, Product, StoreError,
};
use crate::domain::shared::{DetailId, OrderId};

#[derive(Debug, Default)]
struct State {
    orders: Vec<PersistedOrder>,
    details: Vec<PersistedDetail>,
    products: Vec<Product>,
    clients: Vec<Client>,
    detail_calls: usize,
    fail_create_order: bool,
    fail_update_order: bool,
    fail_delete_order: bool,
    fail_delete_details: bool,
    fail_list_products: bool,
    fail_create_detail_at: Option<usize>,
}

/// In-memory implementation of `OrderStorePort`.
///
/// Suitable for testing and development. Not for production use. Individual
/// operations can be scripted to fail, which is how the partial-failure
/// behavior of the persistence flows is exercised without a network.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    state: RwLock<State>,
}

fn injected() -> StoreError {
    StoreError::Rejected {
        status: 503,
        message: "injected failure".to_string(),
    }
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the product catalog (for test setup).
    pub fn seed_products(&self, products: Vec<Product>) {
        self.state.write().unwrap().products = products;
    }

    /// Seed the customer list (for test setup).
    pub fn seed_clients(&self, clients: Vec<Client>) {
        self.state.write().unwrap().clients = clients;
    }

    /// Make the next `create_order` calls fail.
    pub fn fail_create_order(&self) {
        self.state.write().unwrap().fail_create_order = true;
    }

    /// Make the next `update_order` calls fail.
    pub fn fail_update_order(&self) {
        self.state.write().unwrap().fail_update_order = true;
    }

    /// Make the next `delete_order` calls fail.
    pub fn fail_delete_order(&self) {
        self.state.write().unwrap().fail_delete_order = true;
    }

    /// Make the next `delete_details` calls fail.
    pub fn fail_delete_details(&self) {
        self.state.write().unwrap().fail_delete_details = true;
    }

    /// Make the next `list_products` calls fail.
    pub fn fail_list_products(&self) {
        self.state.write().unwrap().fail_list_products = true;
    }

    /// Make the `nth` `create_detail` call from now fail (zero-based).
    /// Calls made before this point do not count.
    pub fn fail_create_detail_at(&self, nth: usize) {
        let mut state = self.state.write().unwrap();
        state.fail_create_detail_at = Some(state.detail_calls + nth);
    }

    /// Number of order headers currently stored.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.state.read().unwrap().orders.len()
    }

    /// Number of detail records currently stored, across all orders.
    #[must_use]
    pub fn detail_count(&self) -> usize {
        self.state.read().unwrap().details.len()
    }

    /// Fetch a stored header without going through the port.
    #[must_use]
    pub fn order(&self, order_id: &OrderId) -> Option<PersistedOrder> {
        self.state
            .read()
            .unwrap()
            .orders
            .iter()
            .find(|order| &order.order_id == order_id)
            .cloned()
    }

    /// Fetch an order's stored details, in creation order.
    #[must_use]
    pub fn details_for(&self, order_id: &OrderId) -> Vec<PersistedDetail> {
        self.state
            .read()
            .unwrap()
            .details
            .iter()
            .filter(|detail| &detail.order_id == order_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl OrderStorePort for InMemoryOrderStore {
    async fn list_orders(&self) -> Result<Vec<PersistedOrder>, StoreError> {
        Ok(self.state.read().unwrap().orders.clone())
    }

    async fn get_order(&self, order_id: &OrderId) -> Result<PersistedOrder, StoreError> {
        self.order(order_id).ok_or_else(|| StoreError::Rejected {
            status: 404,
            message: "order not found".to_string(),
        })
    }

    async fn create_order(&self, header: &NewOrderHeader) -> Result<OrderId, StoreError> {
        let mut state = self.state.write().unwrap();
        if state.fail_create_order {
            return Err(injected());
        }
        let order_id = OrderId::generate();
        state.orders.push(PersistedOrder {
            order_id: order_id.clone(),
            client: ClientRef::by_id(header.client_id.clone()),
            date: header.date,
            subtotal: header.subtotal,
            total: header.total,
        });
        Ok(order_id)
    }

    async fn update_order(
        &self,
        order_id: &OrderId,
        header: &NewOrderHeader,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        if state.fail_update_order {
            return Err(injected());
        }
        let order = state
            .orders
            .iter_mut()
            .find(|order| &order.order_id == order_id)
            .ok_or_else(|| StoreError::Rejected {
                status: 404,
                message: "order not found".to_string(),
            })?;
        order.client = ClientRef::by_id(header.client_id.clone());
        order.date = header.date;
        order.subtotal = header.subtotal;
        order.total = header.total;
        Ok(())
    }

    async fn delete_order(&self, order_id: &OrderId) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        if state.fail_delete_order {
            return Err(injected());
        }
        state.orders.retain(|order| &order.order_id != order_id);
        Ok(())
    }

    async fn list_details(&self, order_id: &OrderId) -> Result<Vec<PersistedDetail>, StoreError> {
        Ok(self.details_for(order_id))
    }

    async fn create_detail(&self, detail: &NewOrderDetail) -> Result<DetailId, StoreError> {
        let mut state = self.state.write().unwrap();
        let call = state.detail_calls;
        state.detail_calls += 1;
        if state.fail_create_detail_at == Some(call) {
            return Err(injected());
        }
        state.details.push(PersistedDetail {
            order_id: detail.order_id.clone(),
            product_id: detail.product_id.clone(),
            quantity: detail.quantity,
            unit_price: detail.unit_price,
            line_total: detail.line_total,
        });
        Ok(DetailId::generate())
    }

    async fn delete_details(&self, order_id: &OrderId) -> Result<(), StoreError> {
        let mut state = self.state.write().unwrap();
        if state.fail_delete_details {
            return Err(injected());
        }
        state.details.retain(|detail| &detail.order_id != order_id);
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let state = self.state.read().unwrap();
        if state.fail_list_products {
            return Err(injected());
        }
        Ok(state.products.clone())
    }

    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        Ok(self.state.read().unwrap().clients.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{ClientId, Money, ProductId, Quantity};
    use rust_decimal_macros::dec;

    fn header() -> NewOrderHeader {
        NewOrderHeader {
            client_id: ClientId::new("C1"),
            date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            subtotal: Money::new(dec!(20.00)),
            total: Money::new(dec!(20.00)),
        }
    }

    fn detail(order_id: &OrderId, product: &str) -> NewOrderDetail {
        NewOrderDetail {
            order_id: order_id.clone(),
            product_id: ProductId::new(product),
            quantity: Quantity::try_from(2).unwrap(),
            unit_price: Money::new(dec!(10.00)),
            line_total: Money::new(dec!(20.00)),
        }
    }

    #[tokio::test]
    async fn create_and_get_order() {
        let store = InMemoryOrderStore::new();
        let order_id = store.create_order(&header()).await.unwrap();

        let found = store.get_order(&order_id).await.unwrap();
        assert_eq!(found.client.client_id.as_str(), "C1");
        assert_eq!(store.order_count(), 1);
    }

    #[tokio::test]
    async fn get_missing_order_is_404() {
        let store = InMemoryOrderStore::new();
        let err = store.get_order(&OrderId::new("nope")).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected { status: 404, .. }));
    }

    #[tokio::test]
    async fn delete_details_only_touches_one_order() {
        let store = InMemoryOrderStore::new();
        let first = store.create_order(&header()).await.unwrap();
        let second = store.create_order(&header()).await.unwrap();
        store.create_detail(&detail(&first, "P1")).await.unwrap();
        store.create_detail(&detail(&second, "P2")).await.unwrap();

        store.delete_details(&first).await.unwrap();

        assert!(store.details_for(&first).is_empty());
        assert_eq!(store.details_for(&second).len(), 1);
    }

    #[tokio::test]
    async fn fail_create_detail_at_counts_from_arming() {
        let store = InMemoryOrderStore::new();
        let order_id = store.create_order(&header()).await.unwrap();
        store.create_detail(&detail(&order_id, "P1")).await.unwrap();

        store.fail_create_detail_at(1);
        store.create_detail(&detail(&order_id, "P2")).await.unwrap();
        assert!(store.create_detail(&detail(&order_id, "P3")).await.is_err());
    }
}
