//! Response normalization: envelope checks and typed record decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;

use sd_core::entities::Astronaut;

use crate::error::ApiError;
use crate::image;

/// Extract the `results` array of a collection response.
///
/// # Errors
///
/// [`ApiError::NoData`] when `results` is absent, not an array, or empty.
pub fn extract_results(body: Value) -> Result<Vec<Value>, ApiError> {
    let Value::Object(mut map) = body else {
        return Err(ApiError::NoData);
    };
    match map.remove("results") {
        Some(Value::Array(items)) if !items.is_empty() => Ok(items),
        _ => Err(ApiError::NoData),
    }
}

/// Check that a detail response is a single JSON object.
///
/// # Errors
///
/// [`ApiError::Parse`] for any other JSON shape.
pub fn extract_detail(body: Value) -> Result<Value, ApiError> {
    if body.is_object() {
        Ok(body)
    } else {
        Err(ApiError::Parse(format!(
            "expected a JSON object, got {}",
            json_kind(&body)
        )))
    }
}

/// Decode a single record.
///
/// # Errors
///
/// [`ApiError::Parse`] if the record does not match `T`.
pub fn decode<T: DeserializeOwned>(record: Value) -> Result<T, ApiError> {
    serde_json::from_value(record).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Decode every record, naming the failing index on error.
///
/// # Errors
///
/// [`ApiError::Parse`] on the first record that does not match `T`.
pub fn decode_all<T: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>, ApiError> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            serde_json::from_value(record).map_err(|e| ApiError::Parse(format!("record {idx}: {e}")))
        })
        .collect()
}

/// Decode an astronaut, resolving its display image from the raw payload first.
///
/// # Errors
///
/// [`ApiError::Parse`] if the record does not match [`Astronaut`].
pub fn decode_astronaut(record: Value) -> Result<Astronaut, ApiError> {
    let display_image = image::astronaut_image(&record);
    let mut astronaut: Astronaut = decode(record)?;
    astronaut.display_image = display_image;
    Ok(astronaut)
}

/// [`decode_astronaut`] over a collection.
///
/// # Errors
///
/// [`ApiError::Parse`] on the first record that does not decode.
pub fn decode_astronauts(records: Vec<Value>) -> Result<Vec<Astronaut>, ApiError> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            decode_astronaut(record).map_err(|e| ApiError::Parse(format!("record {idx}: {e}")))
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
