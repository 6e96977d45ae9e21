use serde::Serialize;
use std::fmt;

use crate::error::{NormalizeError, NormalizeResult};

/// Canonical output of the normalizer, in WGS84 degrees.
///
/// Fields are private so every value has passed the global range check in
/// [`GeoPoint::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// "Could not be determined". Collides with the real null island point;
    /// callers must not plot it.
    pub const SENTINEL: GeoPoint = GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> NormalizeResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(NormalizeError::out_of_domain(format!(
                "invalid latitude: {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(NormalizeError::out_of_domain(format!(
                "invalid longitude: {longitude}"
            )));
        }
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// (latitude, longitude), the order map widgets expect.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn is_sentinel(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_new_valid() {
        let point = GeoPoint::new(37.9922, -1.1307).unwrap();
        assert!((point.latitude() - 37.9922).abs() < EPSILON);
        assert!((point.longitude() + 1.1307).abs() < EPSILON);
        assert_eq!(point.as_tuple(), (37.9922, -1.1307));
    }

    #[test]
    fn test_new_boundary_values() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_new_invalid_latitude() {
        assert!(GeoPoint::new(90.5, 0.0).is_err());
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_new_invalid_longitude() {
        assert!(GeoPoint::new(0.0, 181.0).is_err());
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_sentinel() {
        assert!(GeoPoint::SENTINEL.is_sentinel());
        assert_eq!(GeoPoint::SENTINEL.as_tuple(), (0.0, 0.0));
        assert!(!GeoPoint::new(0.0, 1.0).unwrap().is_sentinel());
        // Negative zero compares equal to zero
        assert!(GeoPoint::new(-0.0, 0.0).unwrap().is_sentinel());
    }

    #[test]
    fn test_display_format() {
        let point = GeoPoint::new(40.0, -1.0).unwrap();
        assert_eq!(point.to_string(), "40.000000, -1.000000");
    }

    #[test]
    fn test_serialize_field_names() {
        let point = GeoPoint::new(38.5, -1.25).unwrap();
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["latitude"], 38.5);
        assert_eq!(json["longitude"], -1.25);
    }
}
