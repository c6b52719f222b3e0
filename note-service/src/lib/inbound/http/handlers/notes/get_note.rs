use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::NoteResponseData;
use crate::domain::note::errors::NoteError;
use crate::domain::note::models::NoteId;
use crate::domain::note::ports::NoteServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<NoteResponseData>, ApiError> {
    let id: NoteId = id.parse().map_err(NoteError::from)?;

    state
        .note_service
        .get_note(id)
        .await
        .map_err(ApiError::from)
        .map(|ref note| ApiSuccess::new(StatusCode::OK, note.into()))
}
