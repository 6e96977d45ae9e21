//! Axis-order resolution for pairs that are both in degrees.
//!
//! The feed never says which field is latitude. Rules, first match wins:
//! 1. `a` is a core-Spain latitude and `b` a core-Spain longitude: as given.
//! 2. The mirror of rule 1: swapped.
//! 3. Both globally valid: magnitude heuristic. In Spain latitudes (36..44)
//!    are numerically larger than longitudes (-9..3), so if `|a| < |b| < 90`
//!    the pair is swapped, otherwise as given.
//! 4. Anything else is ambiguous.

use tracing::trace;

use crate::coord::GeoPoint;
use crate::error::{NormalizeError, NormalizeResult};
use crate::region::SPAIN_CORE_REGION;

/// How the pair was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrder {
    /// (a, b) = (latitude, longitude)
    AsGiven,
    /// (a, b) = (longitude, latitude)
    Swapped,
}

/// Decide which of two degree values is the latitude.
pub fn resolve_axis_order(a: f64, b: f64) -> Option<AxisOrder> {
    let region = &SPAIN_CORE_REGION;

    if region.contains_latitude(a) && region.contains_longitude(b) {
        return Some(AxisOrder::AsGiven);
    }
    if region.contains_latitude(b) && region.contains_longitude(a) {
        return Some(AxisOrder::Swapped);
    }
    if a.abs() <= 90.0 && b.abs() <= 180.0 {
        if a.abs() < b.abs() && b.abs() < 90.0 {
            return Some(AxisOrder::Swapped);
        }
        return Some(AxisOrder::AsGiven);
    }
    None
}

pub fn disambiguate(a: f64, b: f64) -> NormalizeResult<GeoPoint> {
    let order = resolve_axis_order(a, b).ok_or_else(|| {
        NormalizeError::ambiguous(format!("({a}, {b}) exceeds global latitude/longitude ranges"))
    })?;
    trace!(a, b, ?order, "degree pair resolved");
    match order {
        AxisOrder::AsGiven => GeoPoint::new(a, b),
        AxisOrder::Swapped => GeoPoint::new(b, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_region_as_given() {
        let point = disambiguate(40.0, -1.0).unwrap();
        assert_eq!(point.as_tuple(), (40.0, -1.0));
        assert_eq!(resolve_axis_order(37.99, -1.13), Some(AxisOrder::AsGiven));
    }

    #[test]
    fn test_core_region_swapped() {
        let point = disambiguate(-1.0, 40.0).unwrap();
        assert_eq!(point.as_tuple(), (40.0, -1.0));
    }

    #[test]
    fn test_core_band_edges_inclusive() {
        assert_eq!(resolve_axis_order(36.0, -9.0), Some(AxisOrder::AsGiven));
        assert_eq!(resolve_axis_order(3.0, 44.0), Some(AxisOrder::Swapped));
    }

    #[test]
    fn test_magnitude_heuristic_swaps() {
        let point = disambiguate(3.0, 41.0).unwrap();
        assert_eq!(point.as_tuple(), (41.0, 3.0));
        // 4.0 is east of the core band, so only the magnitude rule applies
        let point = disambiguate(4.0, 41.0).unwrap();
        assert_eq!(point.as_tuple(), (41.0, 4.0));
        let point = disambiguate(-20.0, 64.1).unwrap();
        assert_eq!(point.as_tuple(), (64.1, -20.0));
    }

    #[test]
    fn test_magnitude_heuristic_keeps_order() {
        // Paris, already in order
        let point = disambiguate(48.8566, 2.3522).unwrap();
        assert_eq!(point.as_tuple(), (48.8566, 2.3522));
        // |b| >= 90 cannot be a latitude
        let point = disambiguate(10.0, 120.0).unwrap();
        assert_eq!(point.as_tuple(), (10.0, 120.0));
        // Equal magnitudes stay as given
        let point = disambiguate(-50.0, 50.0).unwrap();
        assert_eq!(point.as_tuple(), (-50.0, 50.0));
    }

    #[test]
    fn test_zero_pair_is_a_real_point() {
        let point = disambiguate(0.0, 0.0).unwrap();
        assert_eq!(point.as_tuple(), (0.0, 0.0));
    }

    #[test]
    fn test_latitude_out_of_range_is_ambiguous() {
        let err = disambiguate(120.0, 10.0).unwrap_err();
        assert!(matches!(err, NormalizeError::Ambiguous { .. }));
        assert_eq!(resolve_axis_order(-95.0, 1.0), None);
        assert_eq!(resolve_axis_order(10.0, 180.5), None);
    }
}
