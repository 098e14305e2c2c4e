//! Password hashing.
//!
//! Salted, iterated SHA-256 key derivation in the text format
//! `$pbkdf2$iterations$salt$hash`, verified with a constant-time compare.

use crate::AccountError;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Password hasher configuration.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// Number of derivation iterations.
    pub iterations: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self { iterations: 10_000 }
    }
}

impl PasswordHasher {
    /// Create a hasher with custom iterations.
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Hash a password with a fresh random salt.
    pub fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt);
        let key = derive_key(password, &salt, self.iterations);

        format!(
            "$pbkdf2${}${}${}",
            self.iterations,
            hex::encode(salt),
            hex::encode(key)
        )
    }

    /// Verify a password against a stored hash string.
    pub fn verify(&self, password: &str, hash_str: &str) -> Result<bool, AccountError> {
        let parts: Vec<&str> = hash_str.split('$').collect();
        if parts.len() != 5 || !parts[0].is_empty() || parts[1] != "pbkdf2" {
            return Err(AccountError::InvalidHash);
        }

        let iterations: u32 = parts[2].parse().map_err(|_| AccountError::InvalidHash)?;
        let salt = hex::decode(parts[3]).map_err(|_| AccountError::InvalidHash)?;
        let expected = hex::decode(parts[4]).map_err(|_| AccountError::InvalidHash)?;

        let computed = derive_key(password, &salt, iterations);
        Ok(constant_time_eq(&computed, &expected))
    }

    /// Validate password strength before hashing.
    pub fn validate(password: &str) -> Result<(), AccountError> {
        if password.len() < 6 {
            return Err(AccountError::WeakPassword(
                "password must be at least 6 characters".to_string(),
            ));
        }
        Ok(())
    }
}

fn derive_key(password: &str, salt: &[u8], iterations: u32) -> [u8; 32] {
    let mut state: [u8; 32] = Sha256::new()
        .chain_update(salt)
        .chain_update(password.as_bytes())
        .finalize()
        .into();

    for _ in 1..iterations {
        state = Sha256::new()
            .chain_update(state)
            .chain_update(password.as_bytes())
            .finalize()
            .into();
    }

    state
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        // Keep tests fast; production uses the default count.
        PasswordHasher::new(10)
    }

    #[test]
    fn test_hash_and_verify() {
        let h = hasher();
        let stored = h.hash("hunter22");
        assert!(h.verify("hunter22", &stored).unwrap());
        assert!(!h.verify("hunter23", &stored).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let h = hasher();
        assert_ne!(h.hash("same"), h.hash("same"));
    }

    #[test]
    fn test_verify_rejects_bad_format() {
        let h = hasher();
        assert!(matches!(
            h.verify("pw", "plaintext"),
            Err(AccountError::InvalidHash)
        ));
    }

    #[test]
    fn test_validate_length() {
        assert!(PasswordHasher::validate("abcdef").is_ok());
        assert!(matches!(
            PasswordHasher::validate("abc"),
            Err(AccountError::WeakPassword(_))
        ));
    }
}
