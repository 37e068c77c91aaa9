//! Order Composition Context
//!
//! The in-memory order draft: line aggregation with stock ceiling checks,
//! and total derivation. Pure domain logic, directly unit-testable and
//! independent of any presentation or transport layer.

mod draft;
mod errors;
mod line_item;
mod totals;

pub use draft::OrderDraft;
pub use errors::DraftError;
pub use line_item::LineItem;
pub use totals::OrderTotals;
