//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::collections::BTreeMap;

use crate::domain::entities::{
    Clinic, ClinicId, Contact, Location, MedicalTeam, OpeningHours, Rating, ServiceGroup,
    StaffMember,
};

/// Create a staff member with the given specialties
pub fn test_doctor(name: &str, specialties: &[&str]) -> StaffMember {
    StaffMember {
        name: name.to_string(),
        title: "主治醫師".to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create a test clinic with default values
pub fn test_clinic(id: u64) -> Clinic {
    Clinic {
        id: ClinicId(id),
        name: format!("康健診所{}", id),
        clinic_type: "診所".to_string(),
        contact: Contact {
            address: format!("台北市信義區信義路{}段{}號", id, 100 + id),
            phone: Some(format!("02-2{:03}-{:04}", id, 1000 + id)),
            location: Location {
                lat: 25.0330,
                lng: 121.5654,
            },
        },
        rating: Rating {
            score: 4.0,
            review_count: 100,
        },
        departments: vec!["家醫科".to_string()],
        services: vec![ServiceGroup {
            category: "門診".to_string(),
            items: vec!["一般門診".to_string()],
        }],
        features: BTreeMap::new(),
        medical_team: MedicalTeam {
            director: Some(StaffMember {
                name: format!("張醫生{}", id),
                title: "院長".to_string(),
                specialties: vec!["家醫科".to_string()],
            }),
            doctors: Vec::new(),
        },
        opening_hours: Some(OpeningHours {
            weekday: "09:00-21:00".to_string(),
            weekend: "09:00-17:00".to_string(),
        }),
        facilities: Vec::new(),
    }
}

/// Create a test clinic with a specific rating
pub fn test_clinic_rated(id: u64, score: f64, review_count: u32) -> Clinic {
    Clinic {
        rating: Rating {
            score,
            review_count,
        },
        ..test_clinic(id)
    }
}

fn features(pairs: &[(&str, bool)]) -> BTreeMap<String, bool> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Four clinics across three Taipei districts.
///
/// | id | type | district | score | reviews |
/// |----|------|----------|-------|---------|
/// | 1 | 診所 | 信義區 | 4.2 | 120 |
/// | 2 | 牙醫診所 | 大安區 | 3.8 | 300 |
/// | 3 | 診所 | 大安區 | 4.7 | 80 |
/// | 4 | 診所 | 中山區 | 4.9 | 45 |
pub fn sample_clinics() -> Vec<Clinic> {
    let first = Clinic {
        contact: Contact {
            address: "台北市信義區信義路1段100號".to_string(),
            phone: Some("02-2000-1000".to_string()),
            location: Location {
                lat: 25.0330,
                lng: 121.5654,
            },
        },
        rating: Rating {
            score: 4.2,
            review_count: 120,
        },
        departments: strings(&["家醫科", "內科"]),
        services: vec![ServiceGroup {
            category: "門診".to_string(),
            items: strings(&["一般門診", "預防注射"]),
        }],
        features: features(&[("parking", true), ("wheelchair", true)]),
        medical_team: MedicalTeam {
            director: Some(StaffMember {
                name: "張醫生1".to_string(),
                title: "院長".to_string(),
                specialties: strings(&["家醫科", "內科"]),
            }),
            doctors: vec![test_doctor("李醫生1A", &["小兒科", "過敏免疫科"])],
        },
        ..test_clinic(1)
    };

    let second = Clinic {
        clinic_type: "牙醫診所".to_string(),
        contact: Contact {
            address: "台北市大安區忠孝東路4段200號".to_string(),
            phone: None,
            location: Location {
                lat: 25.0418,
                lng: 121.5440,
            },
        },
        rating: Rating {
            score: 3.8,
            review_count: 300,
        },
        departments: strings(&["牙科"]),
        services: vec![ServiceGroup {
            category: "牙科治療".to_string(),
            items: strings(&["洗牙", "根管治療"]),
        }],
        features: features(&[("parking", false)]),
        medical_team: MedicalTeam {
            director: Some(StaffMember {
                name: "陳醫生2".to_string(),
                title: "院長".to_string(),
                specialties: strings(&["牙科"]),
            }),
            doctors: Vec::new(),
        },
        ..test_clinic(2)
    };

    let third = Clinic {
        contact: Contact {
            address: "台北市大安區復興南路1段50號".to_string(),
            phone: None,
            location: Location {
                lat: 25.0339,
                lng: 121.5436,
            },
        },
        rating: Rating {
            score: 4.7,
            review_count: 80,
        },
        departments: strings(&["家醫科", "小兒科"]),
        services: vec![ServiceGroup {
            category: "門診".to_string(),
            items: strings(&["一般門診", "預防注射"]),
        }],
        features: features(&[("nightClinic", true)]),
        medical_team: MedicalTeam {
            director: Some(StaffMember {
                name: "林醫生3".to_string(),
                title: "院長".to_string(),
                specialties: strings(&["家醫科"]),
            }),
            doctors: vec![test_doctor("王醫生3B", &["小兒科"])],
        },
        ..test_clinic(3)
    };

    let fourth = Clinic {
        contact: Contact {
            address: "台北市中山區南京東路2段10號".to_string(),
            phone: None,
            location: Location {
                lat: 25.0580,
                lng: 121.5250,
            },
        },
        rating: Rating {
            score: 4.9,
            review_count: 45,
        },
        departments: strings(&["骨科", "復健科"]),
        services: vec![ServiceGroup {
            category: "復健".to_string(),
            items: strings(&["物理治療"]),
        }],
        features: features(&[("parking", true)]),
        medical_team: MedicalTeam {
            director: None,
            doctors: vec![test_doctor("黃醫生4", &["骨科", "復健科"])],
        },
        ..test_clinic(4)
    };

    vec![first, second, third, fourth]
}
