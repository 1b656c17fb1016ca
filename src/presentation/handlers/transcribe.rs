use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{TranscriptionEngine, WavValidator};
use crate::application::services::ServiceError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<W, E>(
    State(state): State<AppState<W, E>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    W: WavValidator + 'static,
    E: TranscriptionEngine + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Transcribe request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded".to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let content_type = field.content_type().map(String::from);

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            );
        }
    };

    tracing::debug!(
        bytes = data.len(),
        content_type = content_type.as_deref().unwrap_or("none"),
        "Audio upload received"
    );

    match state
        .transcription_service
        .transcribe(content_type.as_deref(), &data)
        .await
    {
        Ok(transcript) => (
            StatusCode::OK,
            Json(TranscribeResponse {
                text: transcript.into_inner(),
            }),
        )
            .into_response(),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Transcription request failed");
            } else {
                tracing::warn!(error = %e, "Transcription request rejected");
            }
            error_response(status, e.to_string())
        }
    }
}

fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ServiceError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        ServiceError::EmptyFile | ServiceError::InvalidWav(_) => StatusCode::BAD_REQUEST,
        ServiceError::Busy => StatusCode::SERVICE_UNAVAILABLE,
        ServiceError::Transcription(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, detail: String) -> axum::response::Response {
    (status, Json(ErrorResponse { detail })).into_response()
}
