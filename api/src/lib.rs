//! Clinic API
//!
//! A read-only REST API over an in-memory collection of clinics loaded from a
//! JSON document at startup. Uses hexagonal (ports & adapters) architecture:
//! handlers call the clinic service, which reads through the repository port.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, Uri},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;

#[cfg(test)]
mod test_utils;


use app::ClinicService;
use config::Config;
use domain::ports::ClinicRepository;
use error::AppError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub clinic_service: Arc<ClinicService<dyn ClinicRepository>>,
    pub config: Config,
}

impl AppState {
    pub fn new(clinics: Arc<dyn ClinicRepository>, config: Config) -> Self {
        Self {
            clinic_service: Arc::new(ClinicService::new(clinics)),
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Build the application router. Each route is registered once; the static
/// `nearby`, `search/*` and `by-district/*` paths win over `:id`.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health check
        .route("/health", get(health))
        // Clinics
        .route("/api/clinics", get(handlers::list_clinics))
        .route("/api/clinics/nearby", get(handlers::nearby_clinics))
        .route(
            "/api/clinics/search/specialty",
            get(handlers::search_by_specialty),
        )
        .route("/api/clinics/search/area", get(handlers::search_by_area))
        .route(
            "/api/clinics/by-district/:district",
            get(handlers::clinics_by_district),
        )
        .route("/api/clinics/:id", get(handlers::get_clinic))
        // Doctors
        .route("/api/doctors/search", get(handlers::search_doctors))
        // Catalog
        .route("/api/departments", get(handlers::list_departments))
        .route("/api/districts", get(handlers::list_districts))
        .fallback(not_found)
        // Middleware
        .layer(CatchPanicLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
