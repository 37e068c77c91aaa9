//! Infrastructure Layer
//!
//! Adapters for the application's ports: the REST client for the backend
//! data service and an in-memory store for tests and development.

pub mod persistence;
pub mod store;
