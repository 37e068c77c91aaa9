//! Order store adapters.

pub mod rest;
