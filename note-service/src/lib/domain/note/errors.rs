use thiserror::Error;

/// Error for NoteId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NoteIdError {
    #[error("Invalid note ID: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all note operations
#[derive(Debug, Clone, Error)]
pub enum NoteError {
    #[error("Invalid note ID: {0}")]
    InvalidNoteId(#[from] NoteIdError),

    #[error("Note not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
