use crate::error::AppError;
use crate::models::{ParticipationRecord, PhotoReference};
use crate::state::AppState;

use super::request::{ParticipationRequest, PhotoSource};
use super::{decide, face_match, text_match, upload};

#[derive(Debug, Clone)]
pub struct Evaluation {
    pub text_match: bool,
    pub face_match: bool,
    pub participation: bool,
    pub target_key: String,
    pub extracted_text: Vec<String>,
}

/// Evaluate one participation request and persist the outcome.
///
/// Upload and record-write failures abort the request. Text detection and
/// face comparison failures only weaken the corresponding signal.
pub async fn run(state: &AppState, request: ParticipationRequest) -> Result<Evaluation, AppError> {
    let config = &state.config;
    let services = &state.services;

    let ParticipationRequest {
        name,
        email,
        date,
        photo,
    } = request;

    let target = match photo {
        PhotoSource::Inline(image) => upload::store(
            services.objects.as_ref(),
            &config.bucket,
            &config.upload_prefix,
            &date,
            &name,
            image,
        )
        .await
        .map_err(AppError::Upload)?,
        PhotoSource::Existing(key) => PhotoReference::new(&config.bucket, key),
    };

    let roster = PhotoReference::new(&config.bucket, &config.roster_image_key);
    let extracted_text = text_match::extract_text(services.text.as_ref(), &roster).await;
    let text_detected = text_match::is_text_match(&name, &extracted_text);

    let references: Vec<PhotoReference> = config
        .reference_image_keys
        .iter()
        .map(|key| PhotoReference::new(&config.bucket, key))
        .collect();
    let face_detected = face_match::any_face_match(
        services.faces.as_ref(),
        &target,
        &references,
        config.similarity_threshold,
    )
    .await;

    let participation = decide(text_detected, face_detected);

    let record = ParticipationRecord {
        email,
        name,
        session_date: date,
        participation,
    };
    services
        .records
        .put_record(&record)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to write participation record: {e}")))?;

    tracing::info!(
        "Participation for {} on {}: text_match={text_detected} face_match={face_detected} participation={participation}",
        record.email,
        record.session_date
    );

    Ok(Evaluation {
        text_match: text_detected,
        face_match: face_detected,
        participation,
        target_key: target.key,
        extracted_text,
    })
}
