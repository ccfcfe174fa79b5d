//! Lenient request-body decoding
//!
//! Bodies are read as raw JSON and each field is picked out on its own, so a
//! missing content type or a field of the wrong type falls back to that
//! field's default. Only a body sent as JSON that fails to parse is rejected.

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap},
};
use common::decimal::Amount;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Decode a request body; non-JSON or empty bodies become an empty object
pub fn parse_body(headers: &HeaderMap, body: &Bytes) -> Result<Value, ApiError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(body).map_err(|e| {
        ApiError::BadRequest(format!("Failed to parse the request body as JSON: {}", e))
    })
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// String field; absent or null is empty, scalars keep their JSON text
pub fn string_field(body: &Value, field: &str) -> String {
    optional_string_field(body, field).unwrap_or_default()
}

/// String field that stays `None` when absent or null
pub fn optional_string_field(body: &Value, field: &str) -> Option<String> {
    match body.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Amount field from a JSON number or numeric string, zero otherwise
pub fn amount_field(body: &Value, field: &str) -> Amount {
    let parsed = match body.get(field) {
        Some(Value::Number(n)) => parse_amount(&n.to_string()),
        Some(Value::String(s)) => parse_amount(s.trim()),
        _ => None,
    };
    parsed.unwrap_or(Amount::ZERO)
}

fn parse_amount(text: &str) -> Option<Amount> {
    text.parse::<Amount>()
        .or_else(|_| Amount::from_scientific(text))
        .ok()
}
