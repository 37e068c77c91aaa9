//! Application Layer
//!
//! Use cases and ports. Orchestrates the domain against the order store
//! port; contains no transport or wire-format code.

pub mod ports;
pub mod use_cases;
