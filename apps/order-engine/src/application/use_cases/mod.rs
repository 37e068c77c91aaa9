//! Application Use Cases
//!
//! Each use case coordinates one operator-facing operation over the order
//! store port. The persistence flows (submit, update, remove) share the
//! step pipeline defined in [`commit`].

mod commit;
mod load_catalog;
mod load_clients;
mod load_order;
mod remove_order;
mod submit_order;
mod update_order;

pub use commit::{CommitError, CommitReceipt, CommitStep, ValidationError};
pub use load_catalog::LoadCatalogUseCase;
pub use load_clients::LoadClientsUseCase;
pub use load_order::LoadOrderUseCase;
pub use remove_order::RemoveOrderUseCase;
pub use submit_order::SubmitOrderUseCase;
pub use update_order::UpdateOrderUseCase;
