//! Coordinate normalization pipeline
//!
//! Takes two raw fields of unknown meaning and produces a canonical
//! (latitude, longitude) or reports why it could not. Stateless and safe to
//! call from any number of threads.

use tracing::debug;

use crate::coord::GeoPoint;
use crate::error::{NormalizeError, NormalizeResult};

pub mod classify;
pub mod disambiguate;
pub mod projection;
pub mod types;

pub use classify::{GEOGRAPHIC_MAX_ABS, PROJECTED_MIN_ABS, classify, classify_number};
pub use disambiguate::{AxisOrder, disambiguate, resolve_axis_order};
pub use projection::{ETRS89_UTM_30N, ProjectionDefinition, convert_projected_to_geographic};
pub use types::{RawValue, ValueClass};

/// Heuristic: in UTM zone 30N over Spain the northing (~4.0e6..4.9e6) is
/// always the larger of the two values. Not exact geodesy; the converter's
/// swap retry covers pairs where it guesses wrong.
pub fn order_easting_northing(a: f64, b: f64) -> (f64, f64) {
    if a > b { (b, a) } else { (a, b) }
}

/// Normalize a raw pair, keeping "unknown" distinct from a real position.
pub fn normalize(a: &RawValue, b: &RawValue) -> NormalizeResult<GeoPoint> {
    let (Some(num_a), Some(num_b)) = (a.as_f64(), b.as_f64()) else {
        return Err(NormalizeError::malformed(format!(
            "unparsable pair ({a:?}, {b:?})"
        )));
    };

    match (classify_number(num_a), classify_number(num_b)) {
        (ValueClass::Projected, ValueClass::Projected) => {
            let (easting, northing) = order_easting_northing(num_a, num_b);
            convert_projected_to_geographic(easting, northing).ok_or_else(|| {
                NormalizeError::projection(format!(
                    "no valid conversion for ({easting}, {northing})"
                ))
            })
        }
        (ValueClass::Geographic, ValueClass::Geographic) => disambiguate(num_a, num_b),
        (class_a, class_b) => Err(NormalizeError::out_of_domain(format!(
            "unsupported combination {class_a:?}/{class_b:?} for ({num_a}, {num_b})"
        ))),
    }
}

/// Always-answer form of [`normalize`]: every failure becomes
/// [`GeoPoint::SENTINEL`]. Never panics.
pub fn normalize_coordinates(a: impl Into<RawValue>, b: impl Into<RawValue>) -> GeoPoint {
    let (a, b) = (a.into(), b.into());
    match normalize(&a, &b) {
        Ok(point) => point,
        Err(err) => {
            debug!("falling back to sentinel: {err}");
            GeoPoint::SENTINEL
        }
    }
}
