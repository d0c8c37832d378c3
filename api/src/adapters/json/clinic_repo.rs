//! In-memory adapter for ClinicRepository

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::loader::load_clinics;
use crate::domain::entities::{Clinic, ClinicId};
use crate::domain::ports::ClinicRepository;
use crate::error::DomainError;

/// Clinic collection loaded from a JSON document and never mutated afterwards
#[derive(Clone)]
pub struct JsonClinicRepository {
    clinics: Arc<[Clinic]>,
}

impl JsonClinicRepository {
    pub fn new(clinics: Vec<Clinic>) -> Self {
        Self {
            clinics: clinics.into(),
        }
    }

    /// Load from `path`; an unreadable file yields an empty repository
    pub fn from_file(path: &Path) -> Self {
        Self::new(load_clinics(path))
    }

    pub fn len(&self) -> usize {
        self.clinics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clinics.is_empty()
    }
}

#[async_trait]
impl ClinicRepository for JsonClinicRepository {
    async fn find_all(&self) -> Result<Arc<[Clinic]>, DomainError> {
        Ok(Arc::clone(&self.clinics))
    }

    async fn find_by_id(&self, id: ClinicId) -> Result<Option<Clinic>, DomainError> {
        Ok(self.clinics.iter().find(|c| c.id == id).cloned())
    }
}
