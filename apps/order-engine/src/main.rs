//! Order Engine Binary
//!
//! Connects to the backend data service and reports what it holds: a
//! quick connectivity and contract check for a deployed backend.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin order-engine
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `ORDER_STORE_URL`: Base URL of the backend data service
//!
//! ## Optional
//! - `ORDER_STORE_TIMEOUT_SECS`: HTTP timeout in seconds (default: 30)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use order_engine::application::ports::OrderStorePort;
use order_engine::application::use_cases::{LoadCatalogUseCase, LoadClientsUseCase};
use order_engine::infrastructure::store::rest::{RestOrderStore, StoreConfig};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Parsed configuration from environment variables.
struct EngineConfig {
    store_url: String,
    timeout: Duration,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting order engine");

    let config = parse_config()?;
    tracing::info!(
        store_url = %config.store_url,
        timeout_secs = config.timeout.as_secs(),
        "Configuration loaded"
    );

    let store_config = StoreConfig::new(config.store_url).with_timeout(config.timeout);
    let store = Arc::new(RestOrderStore::new(&store_config)?);

    let catalog = LoadCatalogUseCase::new(Arc::clone(&store))
        .execute()
        .await
        .context("loading the product catalog")?;
    tracing::info!(products = catalog.len(), "Catalog loaded");

    let clients = LoadClientsUseCase::new(Arc::clone(&store))
        .execute()
        .await
        .context("loading the customer list")?;
    tracing::info!(clients = clients.len(), "Customers loaded");

    let orders = store.list_orders().await.context("loading orders")?;
    tracing::info!(orders = orders.len(), "Orders loaded");
    for order in &orders {
        tracing::info!(
            order_id = %order.order_id,
            client_id = %order.client.client_id,
            date = %order.date,
            total = %order.total,
            "order"
        );
    }

    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant
/// guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "order_engine=info"
                    .parse()
                    .expect("static directive 'order_engine=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> anyhow::Result<EngineConfig> {
    let store_url = std::env::var("ORDER_STORE_URL").unwrap_or_default();
    if store_url.is_empty() {
        anyhow::bail!("ORDER_STORE_URL environment variable is required");
    }

    let timeout_secs: u64 = std::env::var("ORDER_STORE_TIMEOUT_SECS")
        .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
        .parse()
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(EngineConfig {
        store_url,
        timeout: Duration::from_secs(timeout_secs),
    })
}
