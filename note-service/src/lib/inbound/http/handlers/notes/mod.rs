pub mod create_note;
pub mod delete_note;
pub mod get_note;
pub mod list_notes;
pub mod update_note;

pub use create_note::create_note;
pub use delete_note::delete_note;
pub use get_note::get_note;
pub use list_notes::list_notes;
pub use update_note::update_note;

use serde::Serialize;

use super::NoteData;
use crate::domain::note::models::Note;

/// Envelope payload for handlers returning a single note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteResponseData {
    pub note: NoteData,
}

impl From<&Note> for NoteResponseData {
    fn from(note: &Note) -> Self {
        Self { note: note.into() }
    }
}
