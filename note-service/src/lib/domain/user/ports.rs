use async_trait::async_trait;

use crate::domain::user::models::Credential;
use crate::domain::user::models::Identity;
use crate::domain::user::models::Session;
use crate::domain::user::models::SessionToken;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for authentication and session operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated username and sign-up password
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn sign_up(&self, command: SignUpCommand) -> Result<(), UserError>;

    /// Verify credentials and hand back the user's session token.
    ///
    /// Reuses the existing session when the user already has one, so
    /// repeated sign-ins yield the same token until sign-out.
    ///
    /// # Arguments
    /// * `username` - Raw username as submitted
    /// * `password` - Raw password as submitted
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (not distinguished)
    /// * `DatabaseError` - Database operation failed
    async fn sign_in(&self, username: &str, password: &str) -> Result<SessionToken, UserError>;

    /// Resolve a token to the identity it belongs to.
    ///
    /// # Returns
    /// `None` when no session exists for the token
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn resolve_identity(&self, token: SessionToken) -> Result<Option<Identity>, UserError>;

    /// Gate for protected operations.
    ///
    /// # Errors
    /// * `Unauthorized` - Token absent or not backed by a session
    /// * `DatabaseError` - Database operation failed
    async fn require_signed_in(&self, token: Option<SessionToken>)
        -> Result<Identity, UserError>;

    /// End the session behind `token`, if any.
    ///
    /// Absent or unknown tokens are a successful no-op.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn sign_out(&self, token: Option<SessionToken>) -> Result<(), UserError>;
}

/// Credential store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new credential.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, credential: Credential) -> Result<Credential, UserError>;

    /// Retrieve a credential by username.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Credential>, UserError>;
}

/// Session store.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Retrieve the session behind a token.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_token(&self, token: SessionToken) -> Result<Option<Session>, UserError>;

    /// Retrieve the session of a user.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<Session>, UserError>;

    /// Insert `candidate` unless the user already has a session, atomically.
    ///
    /// # Returns
    /// The user's session: the existing one if present, otherwise `candidate`
    ///
    /// # Errors
    /// * `TokenCollision` - Candidate token already belongs to another session
    /// * `DatabaseError` - Database operation failed
    async fn insert_or_get(&self, candidate: Session) -> Result<Session, UserError>;

    /// Remove the session behind a token. Idempotent.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_by_token(&self, token: SessionToken) -> Result<(), UserError>;
}
