//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Aggregates**: Consistency boundaries with invariants
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: Point-in-time product catalog used for stock checks
//! - [`composition`]: Order draft assembly and total derivation

pub mod catalog;
pub mod composition;
pub mod shared;
