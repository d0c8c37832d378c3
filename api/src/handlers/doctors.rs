//! Doctor handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::params::non_empty;
use crate::app::{DoctorMatch, DoctorQuery, SearchResult};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for doctor search
#[derive(Debug, Deserialize)]
pub struct DoctorSearchQuery {
    pub name: Option<String>,
    pub specialty: Option<String>,
}

/// GET /api/doctors/search
///
/// Directors and doctors whose name contains `name` and who practise `specialty`.
/// Both parameters are optional; with neither, every staff member is returned.
pub async fn search_doctors(
    State(state): State<AppState>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<SearchResult<DoctorMatch>>, AppError> {
    let query = DoctorQuery {
        name: non_empty(query.name),
        specialty: non_empty(query.specialty),
    };

    let result = state.clinic_service.search_doctors(&query).await?;
    Ok(Json(result))
}
