//! Clinic record generator
//!
//! Clinic `i` (1-based) always gets id `i`, name `康健診所{i}` and a
//! three-person medical team. Everything else is drawn from a seeded RNG so the
//! same seed reproduces the same document.

use std::collections::BTreeMap;

use clinic_api::domain::entities::{
    Clinic, ClinicId, Contact, Location, MedicalTeam, OpeningHours, Rating, ServiceGroup,
    StaffMember,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Taipei districts with a representative road and an approximate centre
static DISTRICTS: [(&str, &str, f64, f64); 12] = [
    ("信義區", "信義路", 25.0330, 121.5654),
    ("大安區", "復興南路", 25.0264, 121.5436),
    ("中山區", "南京東路", 25.0642, 121.5330),
    ("中正區", "羅斯福路", 25.0324, 121.5199),
    ("松山區", "八德路", 25.0500, 121.5776),
    ("萬華區", "西園路", 25.0340, 121.4997),
    ("大同區", "民生西路", 25.0630, 121.5130),
    ("士林區", "中正路", 25.0930, 121.5240),
    ("北投區", "石牌路", 25.1320, 121.4990),
    ("內湖區", "成功路", 25.0690, 121.5890),
    ("南港區", "南港路", 25.0550, 121.6060),
    ("文山區", "木柵路", 24.9890, 121.5700),
];

static CLINIC_TYPES: [&str; 4] = ["診所", "牙醫診所", "中醫診所", "小兒科診所"];

static DEPARTMENTS: [&str; 10] = [
    "家醫科",
    "內科",
    "小兒科",
    "骨科",
    "復健科",
    "皮膚科",
    "耳鼻喉科",
    "眼科",
    "牙科",
    "婦產科",
];

static SERVICE_GROUPS: [(&str, &[&str]); 3] = [
    ("門診服務", &["一般門診", "預防注射", "健康檢查", "外傷處理"]),
    ("檢查服務", &["X光檢查", "超音波檢查", "抽血檢驗"]),
    ("特別服務", &["成人健檢", "兒童疫苗", "居家照護"]),
];

static FEATURES: [&str; 6] = [
    "parking",
    "wheelchair",
    "nightClinic",
    "weekendClinic",
    "onlineBooking",
    "healthInsurance",
];

static FACILITIES: [&str; 4] = ["X光室", "檢驗室", "復健室", "超音波室"];

// Roughly ±900 m around the district centre
const JITTER_DEG: f64 = 0.008;

pub fn generate_clinics(count: usize, seed: u64) -> Vec<Clinic> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count).map(|i| generate_clinic(i, &mut rng)).collect()
}

fn strings<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Vec<String> {
    items.into_iter().map(|s| s.as_ref().to_string()).collect()
}

fn generate_clinic(index: usize, rng: &mut StdRng) -> Clinic {
    let (district, road, lat, lng) = DISTRICTS[rng.gen_range(0..DISTRICTS.len())];
    let department_count = rng.gen_range(2..=4);
    let departments = strings(DEPARTMENTS.choose_multiple(&mut *rng, department_count));

    let services = SERVICE_GROUPS
        .iter()
        .map(|(category, items)| {
            let take = rng.gen_range(1..=items.len());
            ServiceGroup {
                category: category.to_string(),
                items: strings(items.choose_multiple(&mut *rng, take)),
            }
        })
        .collect();

    let features: BTreeMap<String, bool> = FEATURES
        .iter()
        .map(|name| (name.to_string(), rng.gen_bool(0.5)))
        .collect();

    let score = (rng.gen_range(3.0..=5.0_f64) * 10.0).round() / 10.0;
    let facility_count = rng.gen_range(1..=FACILITIES.len());

    Clinic {
        id: ClinicId(index as u64),
        name: format!("康健診所{}", index),
        clinic_type: CLINIC_TYPES[rng.gen_range(0..CLINIC_TYPES.len())].to_string(),
        contact: Contact {
            address: format!(
                "台北市{}{}{}段{}號",
                district,
                road,
                rng.gen_range(1..=5),
                100 + index
            ),
            phone: Some(format!("02-2{:03}-{:04}", index, 1000 + index)),
            location: Location {
                lat: lat + rng.gen_range(-JITTER_DEG..=JITTER_DEG),
                lng: lng + rng.gen_range(-JITTER_DEG..=JITTER_DEG),
            },
        },
        rating: Rating {
            score,
            review_count: rng.gen_range(10..=500),
        },
        medical_team: medical_team(index, &departments, rng),
        departments,
        services,
        features,
        opening_hours: Some(OpeningHours {
            weekday: "09:00-21:00".to_string(),
            weekend: "09:00-17:00".to_string(),
        }),
        facilities: strings(FACILITIES.choose_multiple(rng, facility_count)),
    }
}

fn medical_team(index: usize, departments: &[String], rng: &mut StdRng) -> MedicalTeam {
    let mut pick = |n: usize| -> Vec<String> {
        departments
            .choose_multiple(&mut *rng, n.min(departments.len()))
            .cloned()
            .collect()
    };

    MedicalTeam {
        director: Some(StaffMember {
            name: format!("張醫生{}", index),
            title: "院長".to_string(),
            specialties: pick(2),
        }),
        doctors: vec![
            StaffMember {
                name: format!("李醫生{}A", index),
                title: "主治醫師".to_string(),
                specialties: pick(2),
            },
            StaffMember {
                name: format!("王醫生{}B", index),
                title: "主治醫師".to_string(),
                specialties: pick(1),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_api::adapters::try_load_clinics;
    use clinic_api::domain::entities::ClinicDocument;

    #[test]
    fn ids_and_names_follow_index() {
        let clinics = generate_clinics(5, 7);

        assert_eq!(clinics.len(), 5);
        for (i, clinic) in clinics.iter().enumerate() {
            assert_eq!(clinic.id, ClinicId(i as u64 + 1));
            assert_eq!(clinic.name, format!("康健診所{}", i + 1));
        }
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(generate_clinics(20, 42), generate_clinics(20, 42));
        assert_ne!(generate_clinics(20, 42), generate_clinics(20, 43));
    }

    #[test]
    fn every_address_has_a_district() {
        for clinic in generate_clinics(50, 42) {
            let district = clinic.district().expect("generated address has a district");
            assert!(DISTRICTS.iter().any(|(name, ..)| *name == district));
        }
    }

    #[test]
    fn values_stay_in_range() {
        for clinic in generate_clinics(50, 1) {
            assert!((3.0..=5.0).contains(&clinic.rating.score));
            assert!((10..=500).contains(&clinic.rating.review_count));
            assert!((2..=4).contains(&clinic.departments.len()));
            assert_eq!(clinic.medical_team.members().count(), 3);
            assert!(clinic
                .medical_team
                .members()
                .flat_map(|m| m.specialties.iter())
                .all(|s| clinic.departments.contains(s)));
        }
    }

    #[test]
    fn written_document_loads_back() {
        let document = ClinicDocument {
            clinics: generate_clinics(10, 42),
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clinics.json");
        std::fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

        let loaded = try_load_clinics(&path).unwrap();

        assert_eq!(loaded.len(), 10);
        assert_eq!(loaded[3].id, document.clinics[3].id);
        assert_eq!(loaded[3].contact.address, document.clinics[3].contact.address);
    }
}
