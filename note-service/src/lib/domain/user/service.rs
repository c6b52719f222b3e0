use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::Credential;
use crate::domain::user::models::Identity;
use crate::domain::user::models::Session;
use crate::domain::user::models::SessionToken;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::SessionRepository;
use crate::user::ports::UserRepository;

/// Fresh tokens drawn per sign-in before a collision streak is treated as a fault.
const MAX_TOKEN_ATTEMPTS: usize = 3;

/// Domain service implementation for sign-up, sign-in and session gating.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    user_repository: Arc<UR>,
    session_repository: Arc<SR>,
    authenticator: auth::Authenticator,
}

impl<UR, SR> AuthService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    /// Create a new auth service with injected stores.
    ///
    /// # Arguments
    /// * `user_repository` - Credential store
    /// * `session_repository` - Session store
    pub fn new(user_repository: Arc<UR>, session_repository: Arc<SR>) -> Self {
        Self {
            user_repository,
            session_repository,
            authenticator: auth::Authenticator::new(),
        }
    }

    async fn open_session(&self, username: Username) -> Result<Session, UserError> {
        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let candidate = Session {
                token: SessionToken(self.authenticator.issue_token()?),
                username: username.clone(),
            };

            match self.session_repository.insert_or_get(candidate).await {
                Err(UserError::TokenCollision(_)) => {
                    tracing::warn!(
                        username = %username,
                        attempt,
                        "Session token collision, drawing a new token"
                    );
                }
                result => return result,
            }
        }

        Err(UserError::Unknown(format!(
            "No free session token after {} attempts",
            MAX_TOKEN_ATTEMPTS
        )))
    }
}

#[async_trait]
impl<UR, SR> AuthServicePort for AuthService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<(), UserError> {
        let password_hash = self
            .authenticator
            .hash_password(command.password.as_str())?;

        let credential = self
            .user_repository
            .create(Credential {
                username: command.username,
                password_hash,
            })
            .await?;

        tracing::info!(username = %credential.username, "User signed up");

        Ok(())
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<SessionToken, UserError> {
        let username = Username::new(username.to_string())
            .map_err(|_| self.authenticator.reject_unknown(password))?;

        let credential = self
            .user_repository
            .find_by_username(&username)
            .await?
            .ok_or_else(|| self.authenticator.reject_unknown(password))?;

        self.authenticator
            .authenticate(password, &credential.password_hash)?;

        let session = match self.session_repository.find_by_username(&username).await? {
            Some(existing) => existing,
            None => self.open_session(username).await?,
        };

        tracing::info!(username = %session.username, "User signed in");

        Ok(session.token)
    }

    async fn resolve_identity(&self, token: SessionToken) -> Result<Option<Identity>, UserError> {
        Ok(self
            .session_repository
            .find_by_token(token)
            .await?
            .map(Identity::from))
    }

    async fn require_signed_in(
        &self,
        token: Option<SessionToken>,
    ) -> Result<Identity, UserError> {
        let token = token.ok_or(UserError::Unauthorized)?;

        self.resolve_identity(token)
            .await?
            .ok_or(UserError::Unauthorized)
    }

    async fn sign_out(&self, token: Option<SessionToken>) -> Result<(), UserError> {
        if let Some(token) = token {
            self.session_repository.delete_by_token(token).await?;
            tracing::info!("Session ended");
        }

        Ok(())
    }
}
