use crate::models::PhotoReference;
use crate::services::TextDetector;

/// Run text detection on the roster image. A failed call is logged and
/// reads as no text at all.
pub async fn extract_text(detector: &dyn TextDetector, roster: &PhotoReference) -> Vec<String> {
    match detector.detect_text(roster).await {
        Ok(fragments) => {
            tracing::info!("Text extracted: {fragments:?}");
            fragments
        }
        Err(e) => {
            tracing::error!("Error extracting text from {roster}: {e}");
            Vec::new()
        }
    }
}

/// Case-insensitive substring test of `name` against each fragment.
pub fn is_text_match(name: &str, fragments: &[String]) -> bool {
    let needle = name.to_lowercase();
    fragments
        .iter()
        .any(|fragment| fragment.to_lowercase().contains(&needle))
}
