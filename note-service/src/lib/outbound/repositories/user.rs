use async_trait::async_trait;
use sqlx::Row;
use sqlx::SqlitePool;

use crate::domain::user::models::Credential;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, credential: Credential) -> Result<Credential, UserError> {
        sqlx::query(
            r#"
            INSERT INTO user (username, password_hash)
            VALUES (?, ?)
            "#,
        )
        .bind(credential.username.as_str())
        .bind(&credential.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::UsernameAlreadyExists(credential.username.to_string());
                }
            }
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(credential)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT username, password_hash
            FROM user
            WHERE username = ?
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Credential {
                username: Username::new(r.get("username"))?,
                password_hash: r.get("password_hash"),
            })),
            None => Ok(None),
        }
    }
}
