use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::note::errors::NoteError;
use crate::domain::note::models::Note;
use crate::domain::note::models::NoteId;
use crate::domain::note::ports::NoteRepository;

pub struct SqliteNoteRepository {
    pool: SqlitePool,
}

impl SqliteNoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_note(row: SqliteRow) -> Note {
        Note {
            id: NoteId(row.get("id")),
            data: row.get("data"),
            author: row.get("author"),
        }
    }
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn list_all(&self) -> Result<Vec<Note>, NoteError> {
        let rows = sqlx::query(
            r#"
            SELECT id, data, author
            FROM note
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Self::row_to_note).collect())
    }

    async fn create(&self, data: &str, author: &str) -> Result<Note, NoteError> {
        let result = sqlx::query(
            r#"
            INSERT INTO note (data, author)
            VALUES (?, ?)
            "#,
        )
        .bind(data)
        .bind(author)
        .execute(&self.pool)
        .await
        .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        Ok(Note {
            id: NoteId(result.last_insert_rowid()),
            data: data.to_string(),
            author: author.to_string(),
        })
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, NoteError> {
        let row = sqlx::query(
            r#"
            SELECT id, data, author
            FROM note
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        Ok(row.map(Self::row_to_note))
    }

    async fn update(&self, note: Note) -> Result<Note, NoteError> {
        let result = sqlx::query(
            r#"
            UPDATE note
            SET data = ?, author = ?
            WHERE id = ?
            "#,
        )
        .bind(&note.data)
        .bind(&note.author)
        .bind(note.id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(NoteError::NotFound(note.id.0));
        }

        Ok(note)
    }

    async fn delete(&self, id: NoteId) -> Result<(), NoteError> {
        let result = sqlx::query(
            r#"
            DELETE FROM note
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| NoteError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(NoteError::NotFound(id.0));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::outbound::database;

    async fn repository() -> SqliteNoteRepository {
        let pool = database::connect(&DatabaseConfig::in_memory()).await.unwrap();
        database::migrate(&pool).await.unwrap();
        SqliteNoteRepository::new(pool)
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repository = repository().await;

        let first = repository.create("one", "alice").await.unwrap();
        let second = repository.create("two", "alice").await.unwrap();

        assert!(second.id.0 > first.id.0);
        assert_eq!(repository.list_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repository = repository().await;

        let mut note = repository.create("one", "alice").await.unwrap();
        note.data = "uno".to_string();
        note.author = "bob".to_string();
        repository.update(note.clone()).await.unwrap();

        assert_eq!(repository.find_by_id(note.id).await.unwrap(), Some(note.clone()));

        repository.delete(note.id).await.unwrap();
        assert_eq!(repository.find_by_id(note.id).await.unwrap(), None);
        assert!(matches!(
            repository.delete(note.id).await,
            Err(NoteError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_note() {
        let repository = repository().await;

        let result = repository
            .update(Note {
                id: NoteId(42),
                data: "x".to_string(),
                author: "alice".to_string(),
            })
            .await;

        assert!(matches!(result, Err(NoteError::NotFound(42))));
    }
}
