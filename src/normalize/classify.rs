//! Value classification: does a scalar look like UTM meters or like degrees?

use super::types::{RawValue, ValueClass};

/// UTM eastings/northings in this region always have six or more digits.
pub const PROJECTED_MIN_ABS: f64 = 100_000.0;

/// Largest magnitude a latitude or longitude can take.
pub const GEOGRAPHIC_MAX_ABS: f64 = 180.0;

pub fn classify(value: &RawValue) -> ValueClass {
    match value.as_f64() {
        Some(num) => classify_number(num),
        None => ValueClass::Invalid,
    }
}

/// Classify an already parsed number. Values between the two thresholds
/// belong to neither system.
pub fn classify_number(num: f64) -> ValueClass {
    if !num.is_finite() {
        return ValueClass::Invalid;
    }
    let magnitude = num.abs();
    if magnitude > PROJECTED_MIN_ABS {
        ValueClass::Projected
    } else if magnitude <= GEOGRAPHIC_MAX_ABS {
        ValueClass::Geographic
    } else {
        ValueClass::Invalid
    }
}
