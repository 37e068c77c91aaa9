//! Application Ports
//!
//! Interfaces for interacting with external systems. Adapters live in the
//! infrastructure layer.

mod order_store_port;

pub use order_store_port::{
    Client, ClientRef, NewOrderDetail, NewOrderHeader, OrderStorePort, PersistedDetail,
    PersistedOrder, Product, StoreError,
};
