//! Clinic query pipeline
//!
//! Filter, sort and paginate stages applied to the in-memory clinic
//! collection. Each stage is a plain function over slices so it can be
//! composed by the service and tested without a repository.

use serde::Serialize;

use crate::domain::entities::Clinic;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Conjunction of optional clinic predicates. `None` imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClinicFilter {
    pub clinic_type: Option<String>,
    pub min_rating: Option<f64>,
    pub department: Option<String>,
    pub service: Option<String>,
    pub feature: Option<String>,
    pub district: Option<String>,
    pub address: Option<String>,
    pub specialty: Option<String>,
}

impl ClinicFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, clinic: &Clinic) -> bool {
        if let Some(ref clinic_type) = self.clinic_type {
            if clinic.clinic_type != *clinic_type {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            if clinic.rating.score < min_rating {
                return false;
            }
        }
        if let Some(ref department) = self.department {
            if !clinic.has_department(department) {
                return false;
            }
        }
        if let Some(ref service) = self.service {
            if !clinic.offers_service(service) {
                return false;
            }
        }
        if let Some(ref feature) = self.feature {
            if !clinic.has_feature(feature) {
                return false;
            }
        }
        if let Some(ref district) = self.district {
            if clinic.district() != Some(district.as_str()) {
                return false;
            }
        }
        if let Some(ref address) = self.address {
            if !clinic.address().contains(address.as_str()) {
                return false;
            }
        }
        if let Some(ref specialty) = self.specialty {
            if !clinic.has_specialty(specialty) {
                return false;
            }
        }
        true
    }

    /// Clinics satisfying every criterion, in input order
    pub fn apply<'a>(&self, clinics: &'a [Clinic]) -> Vec<&'a Clinic> {
        clinics.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Sort key for clinic listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Rating score, highest first
    Rating,
    /// Review count, highest first
    Reviews,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Rating => write!(f, "rating"),
            SortKey::Reviews => write!(f, "reviews"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortKey::Rating),
            "reviews" => Ok(SortKey::Reviews),
            _ => Err(format!("Unknown sort key: {} (expected rating or reviews)", s)),
        }
    }
}

/// Stable descending sort; `None` keeps the incoming order
pub fn sort_clinics(clinics: &mut [&Clinic], key: Option<SortKey>) {
    match key {
        Some(SortKey::Rating) => {
            clinics.sort_by(|a, b| b.rating.score.total_cmp(&a.rating.score));
        }
        Some(SortKey::Reviews) => {
            clinics.sort_by(|a, b| b.rating.review_count.cmp(&a.rating.review_count));
        }
        None => {}
    }
}

/// 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Returns `None` when either value is zero
    pub fn new(page: usize, limit: usize) -> Option<Self> {
        (page >= 1 && limit >= 1).then_some(Self { page, limit })
    }

    /// `[(page-1)*limit, page*limit)` clipped to `len`
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.limit).min(len);
        let end = start.saturating_add(self.limit).min(len);
        (start, end)
    }
}

/// Paginated result envelope
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<T>,
}

/// Slice `items` into the requested page. Out-of-range pages are empty.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let (start, end) = request.bounds(items.len());
    Page {
        total: items.len(),
        page: request.page,
        limit: request.limit,
        data: items[start..end].to_vec(),
    }
}

/// Complete listing query: filter, then sort, then paginate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClinicQuery {
    pub filter: ClinicFilter,
    pub sort: Option<SortKey>,
    pub page: PageRequest,
}
