//! Clinic API server
//!
//! Loads the clinic document once, then serves read-only queries over it.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clinic_api::adapters::JsonClinicRepository;
use clinic_api::config::Config;
use clinic_api::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,clinic_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Clinic API...");

    // Load configuration
    let config = Config::from_env();

    // Load clinic data; a bad file leaves the collection empty but keeps the server up
    tracing::info!("Loading clinics from {}", config.data_path.display());
    let clinics = Arc::new(JsonClinicRepository::from_file(&config.data_path));
    if clinics.is_empty() {
        tracing::warn!("Clinic collection is empty; queries will return no results");
    }

    let state = AppState::new(clinics, config.clone());
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
