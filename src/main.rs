use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, RestConfig, rest_addr_from_env_value, router};
use donation_core::DonationStore;

/// Main entry point for the blood donation service
///
/// Starts the REST server with an empty in-memory donation store. Records are lost when the
/// process exits.
///
/// # Environment Variables
/// - `DONATION_REST_ADDR`: REST server address (default: "0.0.0.0:3001")
/// - `RUST_LOG`: log filter (default adds `donation=info`)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration is invalid, the address cannot be bound, or the
///   server fails while running
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("donation=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RestConfig::new(rest_addr_from_env_value(
        std::env::var("DONATION_REST_ADDR").ok(),
    )?);

    let store = Arc::new(DonationStore::new());
    let app = router(AppState::new(store));

    tracing::info!("++ Starting donation REST API on {}", config.addr());

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
