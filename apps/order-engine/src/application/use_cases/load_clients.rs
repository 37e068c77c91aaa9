//! Load Clients Use Case

use std::sync::Arc;

use crate::application::ports::{Client, OrderStorePort, StoreError};

/// Fetches the customer list for the client picker.
///
/// Rows with a blank customer id are dropped; they cannot be referenced
/// from an order header.
pub struct LoadClientsUseCase<S: OrderStorePort> {
    store: Arc<S>,
}

impl<S: OrderStorePort> LoadClientsUseCase<S> {
    /// Create a new use case over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch the customer list.
    pub async fn execute(&self) -> Result<Vec<Client>, StoreError> {
        let clients: Vec<Client> = self
            .store
            .list_clients()
            .await?
            .into_iter()
            .filter(|client| !client.client_id.is_blank())
            .collect();
        tracing::debug!(clients = clients.len(), "customer list loaded");
        Ok(clients)
    }
}
