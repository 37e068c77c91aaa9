//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod identifiers;
mod money;
mod quantity;

pub use identifiers::{ClientId, DetailId, OrderId, ProductId};
pub use money::Money;
pub use quantity::Quantity;
