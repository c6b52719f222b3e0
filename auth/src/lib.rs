//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure:
//! - Password hashing (Argon2id)
//! - Opaque session token generation
//! - Authentication coordination
//!
//! Services define their own session storage and adapt these primitives.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Sign-in Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new();
//!
//! // Sign-up: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Sign-in: verify and draw a session token
//! auth.authenticate("password123", &hash).unwrap();
//! let token: u32 = auth.issue_token().unwrap();
//! println!("Token: {}", token);
//! ```

pub mod authenticator;
pub mod password;
pub mod session;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::SessionTokenError;
pub use session::SessionTokenGenerator;
