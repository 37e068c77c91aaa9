// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Engine - Rust Core Library
//!
//! Back-office order management core: order composition over a catalog
//! snapshot, and multi-resource persistence against an external REST data
//! service that offers no cross-resource transaction.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `composition`: the order draft (line aggregation, stock ceilings, totals)
//!   - `catalog`: the composition-time catalog snapshot
//!   - `shared`: identifiers, money, quantity
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `OrderStorePort`, the interface to the backend data service
//!   - `use_cases`: submit / update / remove order flows, catalog and order loading
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `store::rest`: REST adapter over the backend's API
//!   - `persistence`: in-memory store for tests and development

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// Domain re-exports
pub use domain::catalog::{CatalogEntry, CatalogSnapshot};
pub use domain::composition::{DraftError, LineItem, OrderDraft, OrderTotals};
pub use domain::shared::{ClientId, DetailId, Money, OrderId, ProductId, Quantity};

// Application re-exports
pub use application::ports::{
    Client, ClientRef, NewOrderDetail, NewOrderHeader, OrderStorePort, PersistedDetail,
    PersistedOrder, Product, StoreError,
};
pub use application::use_cases::{
    CommitError, CommitReceipt, CommitStep, LoadCatalogUseCase, LoadClientsUseCase,
    LoadOrderUseCase, RemoveOrderUseCase, SubmitOrderUseCase, UpdateOrderUseCase, ValidationError,
};

// Infrastructure re-exports
pub use infrastructure::persistence::InMemoryOrderStore;
pub use infrastructure::store::rest::{RestOrderStore, StoreConfig};
