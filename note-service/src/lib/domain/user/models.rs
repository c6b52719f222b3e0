use std::fmt;
use std::str::FromStr;

use crate::user::errors::PasswordPolicyError;
use crate::user::errors::SessionTokenError;
use crate::user::errors::UsernameError;

/// Stored sign-in credential.
///
/// Created on sign-up, never mutated or deleted.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: Username,
    pub password_hash: String,
}

/// Active session linking an opaque token to a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionToken,
    pub username: Username,
}

/// Username resolved from a valid session, scoped to one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: Username,
}

impl Identity {
    pub fn new(username: Username) -> Self {
        Self { username }
    }
}

impl From<Session> for Identity {
    fn from(session: Session) -> Self {
        Self::new(session.username)
    }
}

/// Username value type
///
/// Primary identity of a user; only required to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username has no characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.is_empty() {
            Err(UsernameError::Empty)
        } else {
            Ok(Self(username))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password accepted at sign-up.
///
/// Never persisted; hashed by the service before storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 8;

    /// Validate a sign-up password.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(password))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Opaque session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(pub u32);

impl SessionToken {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for SessionToken {
    type Err = SessionTokenError;

    /// Parse the decimal form carried in cookies and bearer headers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(SessionToken)
            .map_err(|e| SessionTokenError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new user with validated fields
#[derive(Debug)]
pub struct SignUpCommand {
    pub username: Username,
    pub password: Password,
}

impl SignUpCommand {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty() {
        assert_eq!(Username::new(String::new()), Err(UsernameError::Empty));
        assert!(Username::new("a".to_string()).is_ok());
    }

    #[test]
    fn test_password_minimum_length() {
        assert_eq!(
            Password::new("seven77".to_string()),
            Err(PasswordPolicyError::TooShort { min: 8, actual: 7 })
        );
        assert!(Password::new("eight888".to_string()).is_ok());
    }

    #[test]
    fn test_password_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert!(Password::new("ééééééé".to_string()).is_err());
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("password1".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("password1"));
    }

    #[test]
    fn test_session_token_parse() {
        assert_eq!("42".parse::<SessionToken>(), Ok(SessionToken(42)));
        assert_eq!(
            "4294967295".parse::<SessionToken>(),
            Ok(SessionToken(u32::MAX))
        );
        assert!("4294967296".parse::<SessionToken>().is_err());
        assert!("-1".parse::<SessionToken>().is_err());
        assert!("abc".parse::<SessionToken>().is_err());
        assert!("".parse::<SessionToken>().is_err());
    }
}
