//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod json;

pub use json::{load_clinics, try_load_clinics, JsonClinicRepository};
