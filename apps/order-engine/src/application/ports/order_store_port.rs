//! Backend Order Store Port (Driven Port)
//!
//! Interface to the external data service that owns order headers, order
//! lines (details), and the reference data behind the catalog and client
//! pickers. The store offers ordinary per-resource CRUD and **no**
//! multi-resource transaction; every method is a single independent network
//! operation.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{ClientId, DetailId, Money, OrderId, ProductId, Quantity};

/// Reference to the customer on an order header.
///
/// The backend denormalises the customer's name onto headers it returns;
/// only the id is required when writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    /// Customer identifier.
    pub client_id: ClientId,
    /// Denormalised surname, when the backend sends it.
    pub apellidos: Option<String>,
    /// Denormalised given names, when the backend sends it.
    pub nombres: Option<String>,
}

impl ClientRef {
    /// Reference a customer by id only.
    #[must_use]
    pub const fn by_id(client_id: ClientId) -> Self {
        Self {
            client_id,
            apellidos: None,
            nombres: None,
        }
    }
}

/// Header payload for creating or replacing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderHeader {
    /// Customer the order belongs to.
    pub client_id: ClientId,
    /// Order date.
    pub date: NaiveDate,
    /// Sum of the line totals.
    pub subtotal: Money,
    /// Order total. Equal to the subtotal in this system.
    pub total: Money,
}

/// An order header as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedOrder {
    /// Store-assigned order id.
    pub order_id: OrderId,
    /// Customer reference, possibly with denormalised names.
    pub client: ClientRef,
    /// Order date.
    pub date: NaiveDate,
    /// Persisted subtotal.
    pub subtotal: Money,
    /// Persisted total.
    pub total: Money,
}

/// Line payload for creating a detail record.
///
/// Details carry the id of an already-persisted header; the store enforces
/// that foreign reference, which is why the coordinator creates the header
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderDetail {
    /// Owning order.
    pub order_id: OrderId,
    /// Product on this line.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: Quantity,
    /// Unit price at composition time.
    pub unit_price: Money,
    /// Derived line total.
    pub line_total: Money,
}

/// A detail record as returned by the store.
///
/// Detail listings do not echo the store-assigned detail id; only the
/// create response carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedDetail {
    /// Owning order.
    pub order_id: OrderId,
    /// Product on this line.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: Quantity,
    /// Unit price at composition time.
    pub unit_price: Money,
    /// Persisted line total.
    pub line_total: Money,
}

/// A catalog product as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub product_id: ProductId,
    /// Display description.
    pub description: String,
    /// Purchase cost. Not used by composition, but part of the record.
    pub cost: Money,
    /// Sale price.
    pub price: Money,
    /// Units currently in stock.
    pub quantity: u32,
}

/// A customer record, as used by the client picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Customer identifier.
    pub client_id: ClientId,
    /// Surname.
    pub apellidos: String,
    /// Given names.
    pub nombres: String,
    /// Street address.
    pub direccion: String,
    /// National identity document number.
    pub dni: String,
    /// Landline phone.
    pub telefono: String,
    /// Mobile phone.
    pub movil: String,
}

/// Order store error.
///
/// Success is decided purely by HTTP status class; any non-2xx response or
/// transport failure lands here.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The request never completed (connection, timeout, DNS).
    #[error("order store connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// The store answered with a non-2xx status.
    #[error("order store rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message from the response's `{error}` body, or a generic one.
        message: String,
    },

    /// The store answered 2xx but the body could not be decoded.
    #[error("order store returned an unreadable response: {message}")]
    InvalidResponse {
        /// Decode error details.
        message: String,
    },
}

/// Port for the backend order store.
#[async_trait]
pub trait OrderStorePort: Send + Sync {
    /// List all order headers.
    async fn list_orders(&self) -> Result<Vec<PersistedOrder>, StoreError>;

    /// Fetch one order header.
    async fn get_order(&self, order_id: &OrderId) -> Result<PersistedOrder, StoreError>;

    /// Create an order header; returns the store-assigned id.
    async fn create_order(&self, header: &NewOrderHeader) -> Result<OrderId, StoreError>;

    /// Replace an order header in place.
    async fn update_order(
        &self,
        order_id: &OrderId,
        header: &NewOrderHeader,
    ) -> Result<(), StoreError>;

    /// Delete an order header.
    async fn delete_order(&self, order_id: &OrderId) -> Result<(), StoreError>;

    /// List the detail records of an order.
    async fn list_details(&self, order_id: &OrderId) -> Result<Vec<PersistedDetail>, StoreError>;

    /// Create one detail record; returns the store-assigned detail id.
    async fn create_detail(&self, detail: &NewOrderDetail) -> Result<DetailId, StoreError>;

    /// Delete all detail records of an order.
    async fn delete_details(&self, order_id: &OrderId) -> Result<(), StoreError>;

    /// List the product catalog.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// List customers.
    async fn list_clients(&self) -> Result<Vec<Client>, StoreError>;
}
