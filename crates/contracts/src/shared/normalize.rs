//! Single normalization step for collection responses.
//!
//! The API wraps lists inconsistently: `{ data: { products: [...] } }`,
//! `{ data: { data: [...] } }`, `{ data: [...] }` or a bare array. Every
//! fetch goes through [`normalize_collection`] so pages only ever see `Vec<T>`.

use super::error::DashboardError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Status fields some endpoints put next to the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn from_value(value: &Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value.clone()).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

/// Fails with `Rejected` when the envelope says `success: false`.
pub fn check_envelope(resource: &str, value: &Value) -> Result<(), DashboardError> {
    let envelope = ApiEnvelope::from_value(value);
    if envelope.success == Some(false) {
        return Err(DashboardError::Rejected {
            resource: resource.to_string(),
            message: envelope
                .message
                .unwrap_or_else(|| format!("Failed to load {resource}")),
        });
    }
    Ok(())
}

/// Locates the array: `data.products`, `data.data`, `data`, then the root.
pub fn extract_items(value: &Value) -> Option<&Vec<Value>> {
    let data = value.get("data");
    data.and_then(|d| d.get("products"))
        .and_then(Value::as_array)
        .or_else(|| data.and_then(|d| d.get("data")).and_then(Value::as_array))
        .or_else(|| data.and_then(Value::as_array))
        .or_else(|| value.as_array())
}

/// Turns any of the known response shapes into a typed vector.
///
/// Elements that do not deserialize are skipped with a warning; a response
/// without any recognizable array yields an empty vector.
pub fn normalize_collection<T: DeserializeOwned>(
    resource: &str,
    value: Value,
) -> Result<Vec<T>, DashboardError> {
    check_envelope(resource, &value)?;

    let Some(items) = extract_items(&value) else {
        log::warn!("{resource}: response has no collection, treating as empty");
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(row) => out.push(row),
            Err(e) => log::warn!("{resource}: skipping malformed item #{idx}: {e}"),
        }
    }
    Ok(out)
}

/// Single-record responses: `data` when present, otherwise the root.
pub fn normalize_record<T: DeserializeOwned>(
    resource: &str,
    value: Value,
) -> Result<T, DashboardError> {
    check_envelope(resource, &value)?;
    let record = match value.get("data") {
        Some(data) if data.is_object() => data.clone(),
        _ => value,
    };
    serde_json::from_value(record).map_err(|e| DashboardError::decode(resource, e))
}

/// Human-readable message from an error body, if the API sent one.
pub fn extract_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        name: String,
    }

    fn names(rows: Vec<Row>) -> Vec<String> {
        rows.into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_fallback_order() {
        let nested_products = json!({ "data": { "products": [{ "name": "a" }], "data": [{ "name": "b" }] } });
        let nested_data = json!({ "data": { "data": [{ "name": "b" }] } });
        let flat = json!({ "data": [{ "name": "c" }] });
        let bare = json!([{ "name": "d" }]);

        assert_eq!(names(normalize_collection("rows", nested_products).unwrap()), ["a"]);
        assert_eq!(names(normalize_collection("rows", nested_data).unwrap()), ["b"]);
        assert_eq!(names(normalize_collection("rows", flat).unwrap()), ["c"]);
        assert_eq!(names(normalize_collection("rows", bare).unwrap()), ["d"]);
    }

    #[test]
    fn test_unrecognized_shape_is_empty() {
        let rows: Vec<Row> = normalize_collection("rows", json!({ "data": { "count": 3 } })).unwrap();
        assert!(rows.is_empty());
        let rows: Vec<Row> = normalize_collection("rows", json!(null)).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_malformed_items_skipped() {
        let value = json!({ "data": [{ "name": "ok" }, { "nope": 1 }, { "name": "also ok" }] });
        assert_eq!(names(normalize_collection("rows", value).unwrap()), ["ok", "also ok"]);
    }

    #[test]
    fn test_success_false_is_rejection() {
        let value = json!({ "success": false, "message": "Brand not found", "data": [] });
        let err = normalize_collection::<Row>("brands", value).unwrap_err();
        assert_eq!(
            err,
            DashboardError::Rejected {
                resource: "brands".into(),
                message: "Brand not found".into()
            }
        );
    }

    #[test]
    fn test_record_and_message() {
        let row: Row = normalize_record("user", json!({ "success": true, "data": { "name": "asha" } })).unwrap();
        assert_eq!(row.name, "asha");
        assert!(normalize_record::<Row>("user", json!({ "data": { "id": 1 } })).is_err());
        assert_eq!(extract_message(&json!({ "message": "Invalid credentials" })).as_deref(), Some("Invalid credentials"));
    }
}
