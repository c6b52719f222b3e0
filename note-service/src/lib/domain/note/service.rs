use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteId;
use crate::domain::note::models::WriteNoteCommand;
use crate::domain::note::ports::NoteRepository;
use crate::domain::note::ports::NoteServicePort;

/// Domain service implementation for note operations.
pub struct NoteService<NR>
where
    NR: NoteRepository,
{
    repository: Arc<NR>,
}

impl<NR> NoteService<NR>
where
    NR: NoteRepository,
{
    pub fn new(repository: Arc<NR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<NR> NoteServicePort for NoteService<NR>
where
    NR: NoteRepository,
{
    async fn list_notes(&self) -> Result<Vec<Note>, NoteError> {
        self.repository.list_all().await
    }

    async fn create_note(&self, command: WriteNoteCommand) -> Result<Note, NoteError> {
        let note = self
            .repository
            .create(&command.data, command.author.username.as_str())
            .await?;

        tracing::info!(note_id = %note.id, author = %note.author, "Note created");

        Ok(note)
    }

    async fn get_note(&self, id: NoteId) -> Result<Note, NoteError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(NoteError::NotFound(id.0))
    }

    async fn update_note(&self, id: NoteId, command: WriteNoteCommand) -> Result<Note, NoteError> {
        let mut note = self.get_note(id).await?;

        note.data = command.data;
        note.author = command.author.username.to_string();

        let note = self.repository.update(note).await?;

        tracing::info!(note_id = %note.id, author = %note.author, "Note updated");

        Ok(note)
    }

    async fn delete_note(&self, id: NoteId) -> Result<(), NoteError> {
        self.repository.delete(id).await?;

        tracing::info!(note_id = %id, "Note deleted");

        Ok(())
    }
}
