use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::note::ports::NoteServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::NoteData;
use crate::inbound::http::router::AppState;

pub async fn list_notes(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ListNotesResponseData>, ApiError> {
    state
        .note_service
        .list_notes()
        .await
        .map_err(ApiError::from)
        .map(|notes| {
            ApiSuccess::new(
                StatusCode::OK,
                ListNotesResponseData {
                    notes: notes.iter().map(NoteData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListNotesResponseData {
    pub notes: Vec<NoteData>,
}
