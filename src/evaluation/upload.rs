use crate::models::PhotoReference;
use crate::services::{ObjectStore, ServiceError};

pub const UPLOAD_CONTENT_TYPE: &str = "image/jpeg";

/// Storage key for an inline upload: `{prefix}/{date}_{name}.jpg` with all
/// whitespace dropped from the name. The same (date, name) pair always maps
/// to the same key, so a repeat upload replaces the earlier one.
pub fn derive_key(prefix: &str, date: &str, name: &str) -> String {
    let compact: String = name.chars().filter(|c| !c.is_whitespace()).collect();
    let file_name = format!("{date}_{compact}.jpg");

    if prefix.is_empty() {
        file_name
    } else {
        format!("{prefix}/{file_name}")
    }
}

/// Store the decoded photo and return where it landed.
pub async fn store(
    objects: &dyn ObjectStore,
    bucket: &str,
    prefix: &str,
    date: &str,
    name: &str,
    image: Vec<u8>,
) -> Result<PhotoReference, ServiceError> {
    let location = PhotoReference::new(bucket, derive_key(prefix, date, name));

    objects
        .put_object(&location, image, UPLOAD_CONTENT_TYPE)
        .await?;

    tracing::info!("File uploaded successfully: {}", location.key);
    Ok(location)
}
