//! Clinic service
//!
//! Answers every read-only query against the clinic collection: listings,
//! lookups, aggregations, doctor search and nearby search.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use serde::Serialize;

use super::clinic_query::{paginate, sort_clinics, ClinicFilter, ClinicQuery, Page, SortKey};
use super::geo::{haversine_km, DEFAULT_RADIUS_KM};
use crate::domain::entities::{Clinic, ClinicId, Location, StaffMember};
use crate::domain::ports::ClinicRepository;
use crate::error::{AppError, DomainError};

/// Unpaginated search result
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<T> {
    pub total: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for SearchResult<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            total: data.len(),
            data,
        }
    }
}

/// Clinics located in a single district
#[derive(Debug, Clone, Serialize)]
pub struct DistrictClinics {
    pub district: String,
    pub total: usize,
    pub data: Vec<Clinic>,
}

/// A clinic annotated with its distance from the query point
#[derive(Debug, Clone, Serialize)]
pub struct NearbyClinic {
    #[serde(flatten)]
    pub clinic: Clinic,
    /// Kilometers from the query point
    pub distance: f64,
}

/// A staff member annotated with the clinic they work at
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorMatch {
    #[serde(flatten)]
    pub doctor: StaffMember,
    pub clinic_id: ClinicId,
    pub clinic_name: String,
}

/// Validated nearby search parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub origin: Location,
    pub radius_km: f64,
}

impl NearbyQuery {
    pub fn new(lat: f64, lng: f64, radius_km: Option<f64>) -> Result<Self, DomainError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::Validation(format!(
                "lat must be between -90 and 90, got {}",
                lat
            )));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::Validation(format!(
                "lng must be between -180 and 180, got {}",
                lng
            )));
        }
        let radius_km = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(DomainError::Validation(format!(
                "radius must be a non-negative number of kilometers, got {}",
                radius_km
            )));
        }

        Ok(Self {
            origin: Location { lat, lng },
            radius_km,
        })
    }
}

/// Criteria for doctor search. Both are optional substring/membership tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorQuery {
    pub name: Option<String>,
    pub specialty: Option<String>,
}

impl DoctorQuery {
    pub fn matches(&self, member: &StaffMember) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .map_or(true, |name| member.name.contains(name));
        let specialty_ok = self
            .specialty
            .as_deref()
            .map_or(true, |specialty| member.has_specialty(specialty));
        name_ok && specialty_ok
    }
}

/// Service for querying the clinic collection
pub struct ClinicService<R>
where
    R: ClinicRepository + ?Sized,
{
    clinics: Arc<R>,
}

impl<R> ClinicService<R>
where
    R: ClinicRepository + ?Sized,
{
    pub fn new(clinics: Arc<R>) -> Self {
        Self { clinics }
    }

    /// Filter, sort and paginate the collection
    pub async fn list_clinics(&self, query: &ClinicQuery) -> Result<Page<Clinic>, AppError> {
        let all = self.clinics.find_all().await?;
        let mut matched = query.filter.apply(&all);
        sort_clinics(&mut matched, query.sort);

        let page = paginate(&matched, query.page);
        tracing::debug!(
            total = page.total,
            page = page.page,
            limit = page.limit,
            "Listed clinics"
        );

        Ok(Page {
            total: page.total,
            page: page.page,
            limit: page.limit,
            data: page.data.into_iter().cloned().collect(),
        })
    }

    /// Get a clinic by ID
    pub async fn get_clinic(&self, id: ClinicId) -> Result<Option<Clinic>, AppError> {
        Ok(self.clinics.find_by_id(id).await?)
    }

    /// Clinics where the director or any doctor has the specialty
    pub async fn search_by_specialty(
        &self,
        specialty: &str,
    ) -> Result<SearchResult<Clinic>, AppError> {
        let filter = ClinicFilter {
            specialty: Some(specialty.to_string()),
            ..Default::default()
        };
        self.search(&filter).await
    }

    /// Clinics whose address contains `area`
    pub async fn search_by_area(&self, area: &str) -> Result<SearchResult<Clinic>, AppError> {
        let filter = ClinicFilter {
            address: Some(area.to_string()),
            ..Default::default()
        };
        self.search(&filter).await
    }

    async fn search(&self, filter: &ClinicFilter) -> Result<SearchResult<Clinic>, AppError> {
        let all = self.clinics.find_all().await?;
        let data: Vec<Clinic> = filter.apply(&all).into_iter().cloned().collect();
        Ok(data.into())
    }

    /// Clinics in `district`, optionally rated at least `min_rating`, optionally sorted
    pub async fn clinics_in_district(
        &self,
        district: &str,
        min_rating: Option<f64>,
        sort: Option<SortKey>,
    ) -> Result<DistrictClinics, AppError> {
        let all = self.clinics.find_all().await?;
        let filter = ClinicFilter {
            district: Some(district.to_string()),
            min_rating,
            ..Default::default()
        };
        let mut matched = filter.apply(&all);
        sort_clinics(&mut matched, sort);

        let data: Vec<Clinic> = matched.into_iter().cloned().collect();
        Ok(DistrictClinics {
            district: district.to_string(),
            total: data.len(),
            data,
        })
    }

    /// Directors and doctors across every clinic matching the query
    pub async fn search_doctors(
        &self,
        query: &DoctorQuery,
    ) -> Result<SearchResult<DoctorMatch>, AppError> {
        let all = self.clinics.find_all().await?;

        let data: Vec<DoctorMatch> = all
            .iter()
            .flat_map(move |clinic| {
                clinic
                    .medical_team
                    .members()
                    .filter(move |member| query.matches(member))
                    .map(move |member| DoctorMatch {
                        doctor: member.clone(),
                        clinic_id: clinic.id,
                        clinic_name: clinic.name.clone(),
                    })
            })
            .collect();

        Ok(data.into())
    }

    /// Distinct departments in first-seen order
    pub async fn list_departments(&self) -> Result<Vec<String>, AppError> {
        let all = self.clinics.find_all().await?;

        let mut seen = HashSet::new();
        let departments = all
            .iter()
            .flat_map(|clinic| clinic.departments.iter())
            .filter(|dept| seen.insert(dept.as_str()))
            .cloned()
            .collect();

        Ok(departments)
    }

    /// Distinct address-derived districts, sorted
    pub async fn list_districts(&self) -> Result<Vec<String>, AppError> {
        let all = self.clinics.find_all().await?;

        let districts: BTreeSet<&str> = all.iter().filter_map(|c| c.district()).collect();

        Ok(districts.into_iter().map(str::to_string).collect())
    }

    /// Clinics within the radius, nearest first
    pub async fn nearby(&self, query: &NearbyQuery) -> Result<SearchResult<NearbyClinic>, AppError> {
        let all = self.clinics.find_all().await?;

        let mut data: Vec<NearbyClinic> = all
            .iter()
            .map(|clinic| (clinic, haversine_km(query.origin, clinic.location())))
            .filter(|(_, distance)| *distance <= query.radius_km)
            .map(|(clinic, distance)| NearbyClinic {
                clinic: clinic.clone(),
                distance,
            })
            .collect();
        data.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        tracing::debug!(
            lat = query.origin.lat,
            lng = query.origin.lng,
            radius_km = query.radius_km,
            found = data.len(),
            "Nearby search"
        );

        Ok(data.into())
    }
}
