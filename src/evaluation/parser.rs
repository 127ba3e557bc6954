use serde_json::{Map, Value};

/// Parse a request body into a JSON object. An empty body reads as `{}`.
pub fn parse_body(body: &[u8]) -> Result<Map<String, Value>, String> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(Map::new());
    }

    match serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))? {
        Value::Object(map) => Ok(map),
        _ => Err("Request body must be a JSON object".to_string()),
    }
}
