//! Campus Bazaar Admin - Application Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_bazaar_admin::{api::HttpMarketplaceApi, config::CONFIG, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Campus Bazaar admin console...");

    // Initialize marketplace API client
    tracing::info!(base_url = %CONFIG.upstream.base_url, "Using marketplace API");
    let api = HttpMarketplaceApi::new(&CONFIG.upstream)?;

    // Create application state
    let state = AppState::new(Arc::new(api), CONFIG.clone());

    // Build the router
    let app = routes::create_router(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
