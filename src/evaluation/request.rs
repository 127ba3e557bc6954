use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Map, Value};

pub const MISSING_PARAMETERS: &str = "Missing required parameters";

/// Where the participant's photo comes from. Inline data takes precedence
/// when a request carries both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoSource {
    Inline(Vec<u8>),
    Existing(String),
}

impl PhotoSource {
    pub fn kind(&self) -> &'static str {
        match self {
            PhotoSource::Inline(_) => "inline",
            PhotoSource::Existing(_) => "existing",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticipationRequest {
    pub name: String,
    pub email: String,
    pub date: String,
    pub photo: PhotoSource,
}

fn string_field<'a>(payload: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

/// Check required fields and resolve the photo source. Fields that are
/// absent, not strings, or blank count as missing.
pub fn validate(payload: &Map<String, Value>) -> Result<ParticipationRequest, String> {
    let (Some(name), Some(email), Some(date)) = (
        string_field(payload, "name"),
        string_field(payload, "email"),
        string_field(payload, "date"),
    ) else {
        return Err(MISSING_PARAMETERS.to_string());
    };

    let photo = match (
        string_field(payload, "base64_file"),
        string_field(payload, "target_face_image_key"),
    ) {
        (Some(encoded), _) => PhotoSource::Inline(decode_image(encoded)?),
        (None, Some(key)) => PhotoSource::Existing(key.to_string()),
        (None, None) => return Err(MISSING_PARAMETERS.to_string()),
    };

    Ok(ParticipationRequest {
        name: name.to_string(),
        email: email.to_string(),
        date: date.to_string(),
        photo,
    })
}

/// Decode inline image data. Accepts a bare base64 string or a
/// `data:<mime>;base64,` URL, with embedded whitespace ignored.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>, String> {
    let payload = match encoded.split_once(',') {
        Some((header, data)) if header.starts_with("data:") => data,
        _ => encoded,
    };

    let cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(cleaned.as_bytes())
        .map_err(|e| format!("Invalid base64_file: {e}"))?;

    if bytes.is_empty() {
        return Err("Invalid base64_file: decodes to an empty image".to_string());
    }

    Ok(bytes)
}
