use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use axum_extra::extract::WithRejection;

use super::create_note::WriteNoteRequest;
use super::NoteResponseData;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::WriteNoteCommand;
use crate::domain::note::ports::NoteServicePort;
use crate::domain::user::models::Identity;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Replaces the note's content; the editor becomes its author.
pub async fn update_note(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<WriteNoteRequest>, ApiError>,
) -> Result<ApiSuccess<NoteResponseData>, ApiError> {
    let id: NoteId = id.parse().map_err(NoteError::from)?;

    state
        .note_service
        .update_note(id, WriteNoteCommand::new(body.data, identity))
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::OK, note.into()))
}
