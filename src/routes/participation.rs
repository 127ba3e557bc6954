use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::evaluation::{parser, pipeline, request};
use crate::models::ParticipationResponse;
use crate::state::SharedState;

pub async fn evaluate(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let started = Instant::now();

    // Oversize or unreadable bodies are invalid input, not a transport error
    let body = body.map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;
    let payload = parser::parse_body(&body).map_err(AppError::Validation)?;
    let participant = request::validate(&payload).map_err(|e| {
        tracing::warn!("Rejected participation request: {e}");
        AppError::Validation(e)
    })?;

    tracing::info!(
        "Received participation request for {} <{}> on {} ({} photo)",
        participant.name,
        participant.email,
        participant.date,
        participant.photo.kind()
    );

    let evaluation = pipeline::run(&state, participant).await?;

    let response = ParticipationResponse {
        message: "Processing completed successfully".to_string(),
        text_match: evaluation.text_match,
        face_match: evaluation.face_match,
        participation_status: evaluation.participation,
        target_key: evaluation.target_key,
        extracted_text: evaluation.extracted_text,
    };

    tracing::info!(
        "Execution time: {:.2} seconds",
        started.elapsed().as_secs_f64()
    );

    Ok((
        StatusCode::OK,
        [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(response),
    )
        .into_response())
}

pub async fn evaluate_options() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, "OPTIONS,POST"),
            (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}
