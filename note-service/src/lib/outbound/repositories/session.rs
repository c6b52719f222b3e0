use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::user::models::Session;
use crate::domain::user::models::SessionToken;
use crate::domain::user::models::Username;
use crate::domain::user::ports::SessionRepository;
use crate::user::errors::UserError;

pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: SqliteRow) -> Result<Session, UserError> {
        let token: i64 = row.get("token");
        let token = u32::try_from(token)
            .map_err(|_| UserError::DatabaseError(format!("Stored token out of range: {}", token)))?;

        Ok(Session {
            token: SessionToken(token),
            username: Username::new(row.get("username"))?,
        })
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn find_by_token(&self, token: SessionToken) -> Result<Option<Session>, UserError> {
        sqlx::query(
            r#"
            SELECT token, username
            FROM session
            WHERE token = ?
            "#,
        )
        .bind(i64::from(token.0))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?
        .map(Self::row_to_session)
        .transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Session>, UserError> {
        sqlx::query(
            r#"
            SELECT token, username
            FROM session
            WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?
        .map(Self::row_to_session)
        .transpose()
    }

    async fn insert_or_get(&self, candidate: Session) -> Result<Session, UserError> {
        // The no-op update on a username conflict makes RETURNING yield the existing row
        let row = sqlx::query(
            r#"
            INSERT INTO session (token, username)
            VALUES (?, ?)
            ON CONFLICT(username) DO UPDATE SET username = excluded.username
            RETURNING token, username
            "#,
        )
        .bind(i64::from(candidate.token.0))
        .bind(candidate.username.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::TokenCollision(candidate.token.0);
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Self::row_to_session(row)
    }

    async fn delete_by_token(&self, token: SessionToken) -> Result<(), UserError> {
        sqlx::query(
            r#"
            DELETE FROM session
            WHERE token = ?
            "#,
        )
        .bind(i64::from(token.0))
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
