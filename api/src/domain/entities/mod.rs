//! Domain entities
//!
//! Pure domain models representing the clinic dataset.

pub mod clinic;

pub use clinic::{
    parse_district, Clinic, ClinicDocument, ClinicId, Contact, Location, MedicalTeam,
    OpeningHours, Rating, ServiceGroup, StaffMember,
};
