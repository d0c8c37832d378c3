//! Catalog handlers
//!
//! Distinct values aggregated across the clinic collection.

use axum::{extract::State, Json};

use crate::error::AppError;
use crate::AppState;

/// GET /api/departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let departments = state.clinic_service.list_departments().await?;
    Ok(Json(departments))
}

/// GET /api/districts
///
/// Districts parsed from clinic addresses, sorted.
pub async fn list_districts(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let districts = state.clinic_service.list_districts().await?;
    Ok(Json(districts))
}
