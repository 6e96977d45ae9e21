//! Datastore response parsing
//!
//! The catalogue API answers either `datastore_search` (`result.records`) or
//! `datastore_search_sql` (`result.results`). Field types drift between
//! records, so everything is read through `serde_json::Value`.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::normalize::normalize_coordinates;
use crate::records::types::{Pharmacy, fields};

/// Parse a raw response body into pharmacies.
pub fn parse_datastore_response(body: &str) -> Result<Vec<Pharmacy>> {
    let value: Value = serde_json::from_str(body).context("invalid json")?;
    let items = extract_records(&value)?;

    let mut pharmacies = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            warn!("skipping record {idx}: expected json object");
            continue;
        };
        let pharmacy = parse_record(obj);
        if !pharmacy.has_location() {
            warn!(
                id = %pharmacy.id,
                "no usable coordinates in ({:?}, {:?})",
                obj.get(fields::LATITUDE),
                obj.get(fields::LONGITUDE)
            );
        }
        pharmacies.push(pharmacy);
    }
    debug!("parsed {} pharmacies", pharmacies.len());
    Ok(pharmacies)
}

fn extract_records(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Object(obj) => {
            if obj.get("success") == Some(&Value::Bool(false)) {
                let message = obj
                    .get("error")
                    .and_then(extract_error_message)
                    .unwrap_or_else(|| "request unsuccessful".to_string());
                anyhow::bail!("datastore error: {}", message);
            }
            let result = obj.get("result").and_then(Value::as_object).unwrap_or(obj);
            for key in ["records", "results"] {
                if let Some(Value::Array(items)) = result.get(key) {
                    return Ok(items.as_slice());
                }
            }
            let mut keys: Vec<&str> = result.keys().map(String::as_str).collect();
            keys.sort();
            anyhow::bail!("missing records array (object keys: {})", keys.join(", "));
        }
        _ => anyhow::bail!("expected json object or array"),
    }
}

fn extract_error_message(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()).filter(|t| !t.is_empty()),
        Value::Object(obj) => {
            for key in ["message", "__type", "detail"] {
                if let Some(Value::String(val)) = obj.get(key) {
                    let trimmed = val.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
            }
            None
        }
        _ => None,
    }
}

/// Map one datastore row. Missing text fields become empty strings.
pub fn parse_record(obj: &Map<String, Value>) -> Pharmacy {
    let text = |key: &str| obj.get(key).and_then(value_to_string).unwrap_or_default();

    let id = first_present(obj, &[fields::ID, fields::CODE]).unwrap_or_else(|| "0".to_string());
    let url = first_present(obj, &[fields::URL_FULL, fields::URL_SHORT]).unwrap_or_default();
    let photos = fields::PHOTOS
        .iter()
        .filter_map(|key| obj.get(*key).and_then(value_to_string))
        .collect();

    let null = Value::Null;
    let location = normalize_coordinates(
        obj.get(fields::LATITUDE).unwrap_or(&null),
        obj.get(fields::LONGITUDE).unwrap_or(&null),
    );

    Pharmacy {
        id,
        name: text(fields::NAME),
        address: text(fields::ADDRESS),
        city: text(fields::CITY),
        district: text(fields::DISTRICT),
        phone: text(fields::PHONE),
        postal_code: text(fields::POSTAL_CODE),
        email: text(fields::EMAIL),
        url: format_url(&url),
        location,
        photos,
    }
}

fn first_present(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| obj.get(*key).and_then(value_to_string))
}

/// Scalar to trimmed text; null, false, empty and containers are absent.
fn value_to_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(val) => val.trim().to_string(),
        Value::Number(num) => num.to_string(),
        Value::Bool(true) => "true".to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Make a catalogue URL clickable: trimmed, and `https://` added when no
/// scheme is present.
pub fn format_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    format!("https://{trimmed}")
}
