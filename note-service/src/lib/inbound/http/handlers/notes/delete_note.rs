use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::note::errors::NoteError;
use crate::domain::note::models::NoteId;
use crate::domain::note::ports::NoteServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let id: NoteId = id.parse().map_err(NoteError::from)?;

    state
        .note_service
        .delete_note(id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, MessageData::new("Note deleted")))
}
