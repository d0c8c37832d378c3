//! Mock implementations of port traits

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{Clinic, ClinicId};
use crate::domain::ports::ClinicRepository;
use crate::error::DomainError;

// ============================================================================
// Failing Clinic Repository
// ============================================================================

/// Repository whose every call fails, for exercising 500 paths
#[derive(Default)]
pub struct FailingClinicRepository;

#[async_trait]
impl ClinicRepository for FailingClinicRepository {
    async fn find_all(&self) -> Result<Arc<[Clinic]>, DomainError> {
        Err(DomainError::DataAccess("clinic store unavailable".to_string()))
    }

    async fn find_by_id(&self, _id: ClinicId) -> Result<Option<Clinic>, DomainError> {
        Err(DomainError::DataAccess("clinic store unavailable".to_string()))
    }
}
