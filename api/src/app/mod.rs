//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the clinic repository port.

pub mod clinic_query;
pub mod clinic_service;
pub mod geo;

pub use clinic_query::{
    paginate, sort_clinics, ClinicFilter, ClinicQuery, Page, PageRequest, SortKey,
    DEFAULT_LIMIT, DEFAULT_PAGE,
};
pub use clinic_service::{
    ClinicService, DistrictClinics, DoctorMatch, DoctorQuery, NearbyClinic, NearbyQuery,
    SearchResult,
};
pub use geo::{haversine_km, DEFAULT_RADIUS_KM, EARTH_RADIUS_KM};
