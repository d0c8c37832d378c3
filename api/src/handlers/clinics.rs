//! Clinic handlers
//!
//! Listing, lookup and search endpoints under `/api/clinics`.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::params::{non_empty, parse_f64, parse_positive, parse_sort, require};
use crate::app::{
    ClinicFilter, ClinicQuery, DistrictClinics, NearbyClinic, NearbyQuery, Page, PageRequest,
    SearchResult, DEFAULT_LIMIT, DEFAULT_PAGE,
};
use crate::domain::entities::{Clinic, ClinicId};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing clinics
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClinicsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    #[serde(rename = "type")]
    pub clinic_type: Option<String>,
    pub min_rating: Option<String>,
    pub department: Option<String>,
    pub service: Option<String>,
    pub feature: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub specialty: Option<String>,
    pub sort: Option<String>,
}

impl TryFrom<ListClinicsQuery> for ClinicQuery {
    type Error = AppError;

    fn try_from(raw: ListClinicsQuery) -> Result<Self, Self::Error> {
        let page = parse_positive("page", raw.page, DEFAULT_PAGE)?;
        let limit = parse_positive("limit", raw.limit, DEFAULT_LIMIT)?;

        Ok(ClinicQuery {
            filter: ClinicFilter {
                clinic_type: non_empty(raw.clinic_type),
                min_rating: parse_f64("minRating", raw.min_rating)?,
                department: non_empty(raw.department),
                service: non_empty(raw.service),
                feature: non_empty(raw.feature),
                district: non_empty(raw.district),
                address: non_empty(raw.address),
                specialty: non_empty(raw.specialty),
            },
            sort: parse_sort(raw.sort)?,
            page: PageRequest { page, limit },
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SpecialtyQuery {
    pub specialty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AreaQuery {
    pub area: Option<String>,
}

/// Query parameters for the by-district listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictQuery {
    pub min_rating: Option<String>,
    pub sort: Option<String>,
}

/// Query parameters for nearby search; `radius` is in kilometers
#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
}

impl TryFrom<NearbyParams> for NearbyQuery {
    type Error = AppError;

    fn try_from(raw: NearbyParams) -> Result<Self, Self::Error> {
        let lat = parse_f64("lat", raw.lat)?;
        let lng = parse_f64("lng", raw.lng)?;
        let (Some(lat), Some(lng)) = (lat, lng) else {
            return Err(AppError::BadRequest(
                "Latitude and longitude are required".to_string(),
            ));
        };
        let radius = parse_f64("radius", raw.radius)?;

        Ok(NearbyQuery::new(lat, lng, radius)?)
    }
}

/// GET /api/clinics
///
/// Filter, sort and paginate clinics.
pub async fn list_clinics(
    State(state): State<AppState>,
    Query(query): Query<ListClinicsQuery>,
) -> Result<Json<Page<Clinic>>, AppError> {
    let query = ClinicQuery::try_from(query)?;
    let page = state.clinic_service.list_clinics(&query).await?;
    Ok(Json(page))
}

/// GET /api/clinics/:id
///
/// Get clinic details. A non-numeric id cannot match any clinic, so it is a 404 too.
pub async fn get_clinic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Clinic>, AppError> {
    let not_found = || AppError::NotFound(format!("Clinic {} not found", id));

    let clinic_id: ClinicId = id.parse().map_err(|_| not_found())?;
    let clinic = state
        .clinic_service
        .get_clinic(clinic_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(clinic))
}

/// GET /api/clinics/search/specialty
pub async fn search_by_specialty(
    State(state): State<AppState>,
    Query(query): Query<SpecialtyQuery>,
) -> Result<Json<SearchResult<Clinic>>, AppError> {
    let specialty = require("specialty", query.specialty)?;
    let result = state.clinic_service.search_by_specialty(&specialty).await?;
    Ok(Json(result))
}

/// GET /api/clinics/search/area
///
/// Substring match against the clinic address.
pub async fn search_by_area(
    State(state): State<AppState>,
    Query(query): Query<AreaQuery>,
) -> Result<Json<SearchResult<Clinic>>, AppError> {
    let area = require("area", query.area)?;
    let result = state.clinic_service.search_by_area(&area).await?;
    Ok(Json(result))
}

/// GET /api/clinics/by-district/:district
pub async fn clinics_by_district(
    State(state): State<AppState>,
    Path(district): Path<String>,
    Query(query): Query<DistrictQuery>,
) -> Result<Json<DistrictClinics>, AppError> {
    let min_rating = parse_f64("minRating", query.min_rating)?;
    let sort = parse_sort(query.sort)?;

    let result = state
        .clinic_service
        .clinics_in_district(&district, min_rating, sort)
        .await?;

    Ok(Json(result))
}

/// GET /api/clinics/nearby
///
/// Clinics within `radius` km of (`lat`, `lng`), nearest first.
pub async fn nearby_clinics(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<SearchResult<NearbyClinic>>, AppError> {
    let query = NearbyQuery::try_from(params)?;
    let result = state.clinic_service.nearby(&query).await?;
    Ok(Json(result))
}
