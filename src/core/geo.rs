use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earth's mean radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Errors raised when constructing a [`GeoPoint`] from raw coordinates
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// A validated latitude/longitude pair, immutable once constructed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Construct a point, rejecting coordinates outside the valid ranges
    pub fn new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeoError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Great-circle (haversine) distance to another point in kilometers
    ///
    /// Symmetric, non-negative, zero only for identical coordinates.
    #[inline]
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range_latitude() {
        assert_eq!(
            GeoPoint::new(91.0, 0.0),
            Err(GeoError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            GeoPoint::new(-90.5, 0.0),
            Err(GeoError::LatitudeOutOfRange(-90.5))
        );
    }

    #[test]
    fn test_rejects_out_of_range_longitude() {
        assert_eq!(
            GeoPoint::new(0.0, 180.01),
            Err(GeoError::LongitudeOutOfRange(180.01))
        );
    }

    #[test]
    fn test_accepts_boundary_coordinates() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_distance_london_to_paris() {
        // Distance from London to Paris (approximately 344 km)
        let london = GeoPoint::new(51.5074, -0.1278).unwrap();
        let paris = GeoPoint::new(48.8566, 2.3522).unwrap();

        let distance = london.distance_km(&paris);
        assert!(
            (distance - 344.0).abs() < 10.0,
            "Distance should be ~344km, got {}",
            distance
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let hanoi = GeoPoint::new(21.0278, 105.8342).unwrap();
        let saigon = GeoPoint::new(10.8231, 106.6297).unwrap();

        let forward = hanoi.distance_km(&saigon);
        let backward = saigon.distance_km(&hanoi);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoPoint::new(40.7128, -74.0060).unwrap();
        assert!(p.distance_km(&p) < 1e-9);
    }
}
