//! Repository port traits
//!
//! These traits define the interface for reading clinic data.
//! Implementations are provided by adapters (e.g., the JSON file loader).

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{Clinic, ClinicId};
use crate::error::DomainError;

/// Read-only access to the clinic collection
#[async_trait]
pub trait ClinicRepository: Send + Sync {
    /// Every clinic, in document order
    async fn find_all(&self) -> Result<Arc<[Clinic]>, DomainError>;

    /// Find a clinic by ID
    async fn find_by_id(&self, id: ClinicId) -> Result<Option<Clinic>, DomainError>;
}
