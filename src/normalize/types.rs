//! Raw input values and their classification

use serde_json::Value;

/// One coordinate field exactly as the upstream feed delivered it.
///
/// Nothing is known about which axis it is or which system it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Missing,
}

impl RawValue {
    /// Finite numeric reading of the value, if it has one.
    ///
    /// Text is trimmed before parsing; blank text counts as missing.
    pub fn as_f64(&self) -> Option<f64> {
        let num = match self {
            RawValue::Number(num) => *num,
            RawValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            RawValue::Missing => return None,
        };
        num.is_finite().then_some(num)
    }

    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Missing, Into::into)
    }
}

impl From<&Value> for RawValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(num) => num.as_f64().map_or(RawValue::Missing, RawValue::Number),
            Value::String(text) => RawValue::Text(text.clone()),
            // null, booleans and containers carry no coordinate
            _ => RawValue::Missing,
        }
    }
}

/// Which coordinate system a single value appears to belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// UTM easting or northing, meters.
    Projected,
    /// Latitude or longitude, degrees.
    Geographic,
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_parses() {
        assert_eq!(RawValue::from(37.5).as_f64(), Some(37.5));
        assert_eq!(RawValue::from(650000_i64).as_f64(), Some(650000.0));
    }

    #[test]
    fn test_text_parses_with_whitespace() {
        assert_eq!(RawValue::from(" -1.1307 ").as_f64(), Some(-1.1307));
        assert_eq!(RawValue::from("4206598.155").as_f64(), Some(4206598.155));
        assert_eq!(RawValue::from("1e5").as_f64(), Some(100000.0));
    }

    #[test]
    fn test_non_numeric_text_is_none() {
        assert_eq!(RawValue::from("abc").as_f64(), None);
        assert_eq!(RawValue::from("37,99").as_f64(), None);
        assert_eq!(RawValue::from("").as_f64(), None);
        assert_eq!(RawValue::from("   ").as_f64(), None);
    }

    #[test]
    fn test_non_finite_is_none() {
        assert_eq!(RawValue::from(f64::NAN).as_f64(), None);
        assert_eq!(RawValue::from(f64::INFINITY).as_f64(), None);
        assert_eq!(RawValue::from("inf").as_f64(), None);
        assert_eq!(RawValue::from("NaN").as_f64(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(RawValue::from(None::<f64>), RawValue::Missing);
        assert_eq!(RawValue::from(Some("40.1")), RawValue::Text("40.1".into()));
        assert!(RawValue::from(None::<&str>).is_missing());
    }

    #[test]
    fn test_json_conversion() {
        assert_eq!(RawValue::from(&json!(40.25)), RawValue::Number(40.25));
        assert_eq!(RawValue::from(&json!(-3)), RawValue::Number(-3.0));
        assert_eq!(RawValue::from(&json!("38.0")), RawValue::Text("38.0".into()));
        assert_eq!(RawValue::from(&json!(null)), RawValue::Missing);
        assert_eq!(RawValue::from(&json!(true)), RawValue::Missing);
        assert_eq!(RawValue::from(&json!([1, 2])), RawValue::Missing);
    }

    #[test]
    fn test_is_missing() {
        assert!(RawValue::Missing.is_missing());
        assert!(RawValue::from(" ").is_missing());
        assert!(!RawValue::from("x").is_missing());
        assert!(!RawValue::from(0.0).is_missing());
    }
}
