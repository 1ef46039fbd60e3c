//! DIU Result Proxy - Backend Server
//!
//! Fetches a student's academic record from the university results API,
//! combines the per-semester results into a cumulative transcript and serves
//! it as normalized JSON.

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use crate::external::{DiuResultsClient, ResultsApi};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub results_api: Arc<dyn ResultsApi>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "result_proxy=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting DIU Result Proxy");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        base_url = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        "Upstream results API"
    );

    let client = DiuResultsClient::new(&config.upstream)?;

    // Create application state
    let state = AppState {
        results_api: Arc::new(client),
    };

    // Build application
    let app = routes::create_app(state);

    // Start server
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
