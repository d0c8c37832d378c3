//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod catalog;
pub mod clinics;
pub mod doctors;
pub mod params;

pub use catalog::{list_departments, list_districts};
pub use clinics::{
    clinics_by_district, get_clinic, list_clinics, nearby_clinics, search_by_area,
    search_by_specialty,
};
pub use doctors::search_doctors;
