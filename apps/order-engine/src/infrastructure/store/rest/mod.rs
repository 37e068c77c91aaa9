//! REST adapter for the backend data service.

mod adapter;
mod api_types;
mod config;
mod http_client;

pub use adapter::RestOrderStore;
pub use config::StoreConfig;
