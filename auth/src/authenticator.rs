use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::session::SessionTokenError;
use crate::session::SessionTokenGenerator;

/// Well-formed hash with default Argon2id parameters that no password maps to.
/// Verified against when the user is unknown so both rejections cost the same.
const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$AzunVm6nqV1G10DQAkAl8g$SKRMjastN/QkfBG17D4vVAz5wrNmdvPcfKkb8r9aVDQ";

/// Authentication coordinator combining password verification and
/// session token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_generator: SessionTokenGenerator,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    pub fn new() -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_generator: SessionTokenGenerator::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against the stored hash.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be processed
    pub fn authenticate(&self, password: &str, stored_hash: &str) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Reject a sign-in for a user that has no stored hash.
    ///
    /// Runs a full verification against a decoy hash first, so callers
    /// cannot tell unknown users from wrong passwords by response time.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        let _ = self.password_hasher.verify(password, DECOY_HASH);
        AuthenticationError::InvalidCredentials
    }

    /// Draw a candidate session token.
    ///
    /// The caller decides whether the token is actually recorded; an
    /// existing session for the same user takes precedence.
    pub fn issue_token(&self) -> Result<u32, SessionTokenError> {
        self.token_generator.generate()
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new();

        let hash = authenticator
            .hash_password("password1")
            .expect("Failed to hash password");

        assert!(authenticator.authenticate("password1", &hash).is_ok());
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new();

        let hash = authenticator
            .hash_password("password1")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("password2", &hash);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let authenticator = Authenticator::new();

        let result = authenticator.authenticate("password1", "plaintext-password1");
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_decoy_hash_is_well_formed() {
        let hasher = PasswordHasher::new();

        assert!(matches!(hasher.verify("password1", DECOY_HASH), Ok(false)));
    }

    #[test]
    fn test_reject_unknown() {
        let authenticator = Authenticator::new();

        assert!(matches!(
            authenticator.reject_unknown("password1"),
            AuthenticationError::InvalidCredentials
        ));
    }

    #[test]
    fn test_issue_token() {
        let authenticator = Authenticator::new();

        let first = authenticator.issue_token().expect("Failed to issue token");
        let second = authenticator.issue_token().expect("Failed to issue token");

        // 1 in 2^32 chance of a false failure
        assert_ne!(first, second);
    }
}
