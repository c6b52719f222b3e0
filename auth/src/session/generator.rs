use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;

use super::errors::SessionTokenError;

/// Opaque session token generator.
///
/// Tokens are drawn uniformly from the `u32` space using the operating
/// system CSPRNG. Uniqueness is not checked here; the session store owns
/// that constraint.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionTokenGenerator;

impl SessionTokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw a new random token.
    ///
    /// # Errors
    /// * `EntropyUnavailable` - The OS random source failed
    pub fn generate(&self) -> Result<u32, SessionTokenError> {
        let mut bytes = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| SessionTokenError::EntropyUnavailable(e.to_string()))?;

        Ok(u32::from_le_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate_tokens_vary() {
        let generator = SessionTokenGenerator::new();

        let tokens: HashSet<u32> = (0..64)
            .map(|_| generator.generate().expect("Failed to generate token"))
            .collect();

        // 64 draws from 2^32 colliding down to a handful would mean a broken source
        assert!(tokens.len() > 60);
    }
}
