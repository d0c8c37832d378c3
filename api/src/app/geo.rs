//! Great-circle distance

use crate::domain::entities::Location;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default search radius for nearby queries, in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 1.0;

/// Haversine distance between two points, in kilometers
pub fn haversine_km(from: Location, to: Location) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAIPEI_101: Location = Location {
        lat: 25.0340,
        lng: 121.5645,
    };
    const TAIPEI_MAIN_STATION: Location = Location {
        lat: 25.0478,
        lng: 121.5170,
    };

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(haversine_km(TAIPEI_101, TAIPEI_101), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = haversine_km(TAIPEI_101, TAIPEI_MAIN_STATION);
        let back = haversine_km(TAIPEI_MAIN_STATION, TAIPEI_101);

        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn known_distance_across_taipei() {
        let d = haversine_km(TAIPEI_101, TAIPEI_MAIN_STATION);

        // roughly 5 km between the two landmarks
        assert!(d > 4.5 && d < 5.5, "got {}", d);
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine_km(
            Location { lat: 0.0, lng: 0.0 },
            Location { lat: 1.0, lng: 0.0 },
        );

        assert!((d - 111.195).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn antipodal_points() {
        let d = haversine_km(
            Location { lat: 0.0, lng: 0.0 },
            Location {
                lat: 0.0,
                lng: 180.0,
            },
        );

        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
