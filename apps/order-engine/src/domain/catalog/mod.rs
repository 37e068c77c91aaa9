//! Catalog Context
//!
//! The read-only, session-scoped view of the product catalog that order
//! composition checks stock against.

mod snapshot;

pub use snapshot::{CatalogEntry, CatalogSnapshot};
