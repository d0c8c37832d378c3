//! Clinic data loader
//!
//! Reads the data document at startup. A missing or malformed file degrades to
//! an empty collection so the server still comes up for health checks.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::entities::{Clinic, ClinicDocument};
use crate::error::LoadError;

/// Read and parse the clinic document at `path`
pub fn try_load_clinics(path: &Path) -> Result<Vec<Clinic>, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document: ClinicDocument =
        serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    warn_on_duplicate_ids(&document.clinics);

    Ok(document.clinics)
}

/// Load clinics, logging and returning an empty collection on failure
pub fn load_clinics(path: &Path) -> Vec<Clinic> {
    match try_load_clinics(path) {
        Ok(clinics) => {
            tracing::info!(count = clinics.len(), path = %path.display(), "Loaded clinic data");
            clinics
        }
        Err(e) => {
            tracing::error!("Error loading clinic data: {}", e);
            Vec::new()
        }
    }
}

// Lookups return the first record for an id, so later duplicates are unreachable.
fn warn_on_duplicate_ids(clinics: &[Clinic]) {
    let mut seen = HashSet::with_capacity(clinics.len());
    for clinic in clinics {
        if !seen.insert(clinic.id) {
            tracing::warn!(id = %clinic.id, "Duplicate clinic id in data file");
        }
    }
}
