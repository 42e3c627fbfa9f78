//! Deserializers for fields whose shape varies between upstream API versions.
//!
//! Every helper accepts `null` and unknown shapes by yielding `None` / an
//! empty list, so an odd field never fails a whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A nested record that some payloads send as its bare name.
pub trait Named: DeserializeOwned {
    fn from_name(name: String) -> Self;
}

/// `"text"`, `{...}`, or `null`. An object that does not decode as `T`
/// becomes `None` rather than failing the enclosing record.
pub fn opt_named<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Named,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => non_blank(&s).map(T::from_name),
        Some(object @ Value::Object(_)) => serde_json::from_value(object).ok(),
        _ => None,
    })
}

/// `"text"`, `{"name": "text"}`, or `null`.
pub fn opt_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| name_of(v, &["name"])))
}

/// `"url"`, `{"image_url": "url"}`, or `null`. Blank strings become `None`.
pub fn opt_image<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| name_of(v, &["image_url", "thumbnail_url"])))
}

/// `"1958"`, `1958`, or `null`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Nationalities: `"American"`, `["American"]`, or
/// `[{"nationality_name": "American", "name": "United States"}]`.
pub fn nationalities<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(string_list(value, &["nationality_name", "name"]))
}

/// Countries: `"USA,RUS"`, `["USA"]`, or `[{"alpha_3_code": "USA"}]`.
pub fn countries<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(string_list(value, &["alpha_3_code", "name"]))
}

fn string_list(value: Option<Value>, keys: &[&str]) -> Vec<String> {
    match value {
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::Array(items)) => items.iter().filter_map(|v| name_of(v, keys)).collect(),
        _ => Vec::new(),
    }
}

fn name_of(value: &Value, keys: &[&str]) -> Option<String> {
    match value {
        Value::String(s) => non_blank(s),
        Value::Object(map) => keys
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str).and_then(non_blank)),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
