use async_trait::async_trait;

use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::WriteNoteCommand;

/// Port for note domain service operations.
#[async_trait]
pub trait NoteServicePort: Send + Sync + 'static {
    /// List every note.
    async fn list_notes(&self) -> Result<Vec<Note>, NoteError>;

    /// Create a note authored by the command's identity.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_note(&self, command: WriteNoteCommand) -> Result<Note, NoteError>;

    /// Retrieve a note.
    ///
    /// # Errors
    /// * `NotFound` - Note does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_note(&self, id: NoteId) -> Result<Note, NoteError>;

    /// Replace a note's content and author.
    ///
    /// # Errors
    /// * `NotFound` - Note does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_note(&self, id: NoteId, command: WriteNoteCommand) -> Result<Note, NoteError>;

    /// Delete a note.
    ///
    /// # Errors
    /// * `NotFound` - Note does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_note(&self, id: NoteId) -> Result<(), NoteError>;
}

/// Persistence operations for notes.
#[async_trait]
pub trait NoteRepository: Send + Sync + 'static {
    async fn list_all(&self) -> Result<Vec<Note>, NoteError>;

    /// Persist a new note and return it with its assigned ID.
    async fn create(&self, data: &str, author: &str) -> Result<Note, NoteError>;

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, NoteError>;

    /// # Errors
    /// * `NotFound` - No row with this ID
    async fn update(&self, note: Note) -> Result<Note, NoteError>;

    /// # Errors
    /// * `NotFound` - No row with this ID
    async fn delete(&self, id: NoteId) -> Result<(), NoteError>;
}
