use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use super::NoteResponseData;
use crate::domain::note::models::WriteNoteCommand;
use crate::domain::note::ports::NoteServicePort;
use crate::domain::user::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_note(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    WithRejection(Json(body), _): WithRejection<Json<WriteNoteRequest>, ApiError>,
) -> Result<ApiSuccess<NoteResponseData>, ApiError> {
    state
        .note_service
        .create_note(WriteNoteCommand::new(body.data, identity))
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::CREATED, note.into()))
}

/// HTTP request body for creating or editing a note
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WriteNoteRequest {
    pub data: String,
}
