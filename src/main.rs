//! Storefront server.
//!
//! Generates the catalog, then serves the HTML and JSON routes until
//! interrupted.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

use storefront::web::{build_router, AppState};
use storefront::{telemetry, Currency, LoggingConfig, QueueHost, StorefrontConfig};

/// Demo storefront serving a synthetic product catalog.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "STOREFRONT_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    /// Job-queue service host, with or without a scheme.
    #[arg(long, env = "STOREFRONT_QUEUE_HOST", default_value = "localhost:3000")]
    queue_host: String,

    /// Seed for the catalog generator. Omit for a fresh catalog on every start.
    #[arg(long, env = "STOREFRONT_SEED")]
    seed: Option<u64>,

    /// Number of products to generate.
    #[arg(long, env = "STOREFRONT_PRODUCTS", default_value_t = StorefrontConfig::DEFAULT_PRODUCT_COUNT)]
    products: usize,

    /// Currency of generated prices.
    #[arg(long, env = "STOREFRONT_CURRENCY", default_value = "DKK")]
    currency: Currency,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, env = "STOREFRONT_LOG_JSON")]
    log_json: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<StorefrontConfig> {
        let queue_host = QueueHost::new(self.queue_host).context("invalid queue host")?;
        let mut builder = StorefrontConfig::builder()
            .bind_address(self.bind)
            .queue_host(queue_host)
            .product_count(self.products)
            .currency(self.currency)
            .logging(LoggingConfig {
                level: self.log_level,
                json: self.log_json,
            });
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }
        builder.build().context("invalid configuration")
    }
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config()?;
    telemetry::init_tracing(config.logging());

    let state = AppState::from_config(&config).context("failed to initialise storefront")?;
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    tracing::info!(address = %config.bind_address(), "storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
