//! JSON file adapters
//!
//! The clinic collection is read once from a `{ "clinics": [...] }` document
//! and served from memory for the life of the process.

pub mod clinic_repo;
pub mod loader;

pub use clinic_repo::JsonClinicRepository;
pub use loader::{load_clinics, try_load_clinics};
