//! Great-circle distance between geographic coordinates.

use serde::{Deserialize, Serialize};

/// Earth's mean radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// The warehouse all quotes are measured from (Newark, CA).
pub const WAREHOUSE: Coordinate = Coordinate {
    lat: 37.5297,
    lon: -122.0402,
};

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Haversine great-circle distance between two coordinates, in miles.
///
/// Pure and total: finite inputs always produce a finite, non-negative
/// result, and coincident points yield exactly zero.
pub fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Manhattan, roughly the opposite coast from the warehouse.
    const NEW_YORK: Coordinate = Coordinate {
        lat: 40.7128,
        lon: -74.0060,
    };

    #[test]
    fn test_coincident_points_are_zero() {
        assert_eq!(haversine_miles(WAREHOUSE, WAREHOUSE), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = haversine_miles(WAREHOUSE, NEW_YORK);
        let back = haversine_miles(NEW_YORK, WAREHOUSE);
        assert_eq!(there, back);
    }

    #[test]
    fn test_cross_country_distance() {
        let d = haversine_miles(WAREHOUSE, NEW_YORK);
        assert!(d > 2540.0 && d < 2570.0, "got {d}");
    }

    #[test]
    fn test_pure_latitude_offset() {
        // 0.8973 degrees of latitude is 62 miles of arc at R = 3959.
        let north = Coordinate::new(WAREHOUSE.lat + 0.8973, WAREHOUSE.lon);
        let d = haversine_miles(WAREHOUSE, north);
        assert!((d - 62.0).abs() < 0.1, "got {d}");
    }

    #[test]
    fn test_distance_is_non_negative() {
        let south = Coordinate::new(-33.8688, 151.2093);
        assert!(haversine_miles(WAREHOUSE, south) > 0.0);
    }
}
