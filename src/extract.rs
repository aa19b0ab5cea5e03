//! Payload property extraction and injection.
//!
//! Secret payloads are either opaque strings or JSON objects with the value
//! under a configured property. Extraction is pure and has no cache or
//! network dependency; both parse failures and missing properties surface as
//! [`AccessError::PropertyNotFound`], which the accessor treats as a soft
//! failure.

use serde_json::{json, Map, Value};

use crate::error::{AccessError, Result};

/// Extract the value from a raw secret payload.
///
/// With no property configured (or an empty one) the payload is returned
/// unchanged. Otherwise the payload must parse as a JSON object containing
/// the property; string values are returned verbatim, other scalars in their
/// JSON rendering.
pub fn extract_property(raw: &str, property: Option<&str>) -> Result<String> {
    let property = match property.filter(|p| !p.is_empty()) {
        Some(p) => p,
        None => return Ok(raw.to_string()),
    };

    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        AccessError::property_not_found(property, format!("payload is not valid JSON: {}", e))
    })?;

    let object = parsed
        .as_object()
        .ok_or_else(|| AccessError::property_not_found(property, "payload is not a JSON object"))?;

    match object.get(property) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => {
            Err(AccessError::property_not_found(property, "property missing from payload"))
        }
        Some(other) => Ok(other.to_string()),
    }
}

/// Wrap a value as a single-property JSON object for storage.
///
/// This is the write-side mirror of [`extract_property`]: a value stored
/// under a property must round-trip through extraction with the same
/// configuration.
pub fn inject_property(property: &str, value: &str) -> Result<String> {
    let mut object = Map::new();
    object.insert(property.to_string(), json!(value));
    Ok(serde_json::to_string(&Value::Object(object))?)
}
