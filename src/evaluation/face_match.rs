use crate::models::PhotoReference;
use crate::services::{FaceComparer, FaceMatch};

/// True if any match reaches the threshold.
pub fn has_match(matches: &[FaceMatch], threshold: f32) -> bool {
    matches.iter().any(|m| m.similarity >= threshold)
}

/// Compare `target` against one reference image. Failures are logged and
/// count as no match.
async fn compare_one(
    comparer: &dyn FaceComparer,
    target: &PhotoReference,
    reference: &PhotoReference,
    threshold: f32,
) -> bool {
    let matches = match comparer.compare_faces(target, reference, threshold).await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!("Error comparing faces between {target} and {reference}: {e}");
            return false;
        }
    };

    if !has_match(&matches, threshold) {
        tracing::info!(
            "No face match found between {} and {}",
            target.key,
            reference.key
        );
        return false;
    }

    let best = matches
        .iter()
        .map(|m| m.similarity)
        .fold(f32::MIN, f32::max);
    tracing::info!("Face match found with similarity: {best:.2}%");
    true
}

/// Walk the reference images in order and stop at the first match.
pub async fn any_face_match(
    comparer: &dyn FaceComparer,
    target: &PhotoReference,
    references: &[PhotoReference],
    threshold: f32,
) -> bool {
    for reference in references {
        if compare_one(comparer, target, reference, threshold).await {
            return true;
        }
    }
    false
}
