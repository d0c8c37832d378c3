//! Clinic domain entity
//!
//! A healthcare facility with identity, staff, services and location.
//! Field names follow the camelCase layout of the clinic data document.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Unique identifier for a clinic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClinicId(pub u64);

impl From<u64> for ClinicId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClinicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ClinicId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ClinicId)
            .map_err(|_| format!("Invalid clinic id: {}", s))
    }
}

/// Geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Contact block: postal address, phone and coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: Location,
}

/// Aggregate review rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub score: f64,
    pub review_count: u32,
}

/// A named group of services offered by a clinic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// A director or doctor on a clinic's medical team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl StaffMember {
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalTeam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<StaffMember>,
    #[serde(default)]
    pub doctors: Vec<StaffMember>,
}

impl MedicalTeam {
    /// Director first (when present), then doctors in listed order
    pub fn members(&self) -> impl Iterator<Item = &StaffMember> {
        self.director.iter().chain(self.doctors.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub weekday: String,
    pub weekend: String,
}

/// A clinic record as loaded from the data document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub id: ClinicId,
    pub name: String,
    #[serde(rename = "type")]
    pub clinic_type: String,
    pub contact: Contact,
    pub rating: Rating,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub services: Vec<ServiceGroup>,
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
    #[serde(default)]
    pub medical_team: MedicalTeam,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facilities: Vec<String>,
}

impl Clinic {
    pub fn address(&self) -> &str {
        &self.contact.address
    }

    pub fn location(&self) -> Location {
        self.contact.location
    }

    /// District token derived from the address, if it has one
    pub fn district(&self) -> Option<&str> {
        parse_district(self.address())
    }

    pub fn has_department(&self, department: &str) -> bool {
        self.departments.iter().any(|d| d == department)
    }

    /// True when any service group lists the item
    pub fn offers_service(&self, service: &str) -> bool {
        self.services
            .iter()
            .any(|group| group.items.iter().any(|item| item == service))
    }

    /// Missing features count as `false`
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.get(feature).copied().unwrap_or(false)
    }

    /// True when the director or any doctor practises the specialty
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.medical_team
            .members()
            .any(|member| member.has_specialty(specialty))
    }
}

fn district_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[台臺]北市([^區]+區)").expect("district pattern is a valid regex")
    })
}

/// Extract the district from a Taipei address.
///
/// `"台北市信義區信義路1段100號"` yields `"信義區"`; an address that does not
/// follow the `<city><name>區` layout yields `None`.
pub fn parse_district(address: &str) -> Option<&str> {
    district_pattern()
        .captures(address)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Top-level layout of the clinic data document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClinicDocument {
    pub clinics: Vec<Clinic>,
}
