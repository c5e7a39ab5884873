//! Argon2id password hashing and verification.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use tracing::warn;

use todo_core::config::AuthConfig;
use todo_core::error::AppError;

use crate::error::AuthError;

/// Handles password hashing and verification using Argon2id.
///
/// New hashes use the work factor from [`AuthConfig`]; verification reads
/// the parameters embedded in the stored PHC string, so hashes created under
/// an older work factor keep verifying after the configuration changes.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Creates a hasher from the configured Argon2 work factor.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let params = Params::new(
            config.argon2.memory_kib,
            config.argon2.iterations,
            config.argon2.parallelism,
            None,
        )
        .map_err(|e| AppError::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2 hash.
    ///
    /// A stored value that is not a parseable PHC string never matches.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                warn!(error = %e, "Password verification failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fast_config;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(&fast_config()).unwrap()
    }

    #[test]
    fn test_hash_then_verify() {
        let hasher = hasher();
        let hash = hasher.hash_password("12345aA@").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("12345aA@", &hash));
        assert!(!hasher.verify_password("12345aA!", &hash));
    }

    #[test]
    fn test_salts_differ() {
        let hasher = hasher();
        let first = hasher.hash_password("same-password").unwrap();
        let second = hasher.hash_password("same-password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify_password("same-password", &first));
        assert!(hasher.verify_password("same-password", &second));
    }

    #[test]
    fn test_malformed_hash_is_false() {
        let hasher = hasher();
        assert!(!hasher.verify_password("anything", "not-a-hash"));
        assert!(!hasher.verify_password("anything", ""));
    }

    #[test]
    fn test_verifies_hash_from_other_work_factor() {
        let hash = hasher().hash_password("portable").unwrap();

        let mut config = fast_config();
        config.argon2.memory_kib = 512;
        config.argon2.iterations = 2;
        let other = PasswordHasher::new(&config).unwrap();

        assert!(other.verify_password("portable", &hash));
    }

    #[test]
    fn test_rejects_invalid_params() {
        let mut config = fast_config();
        config.argon2.iterations = 0;
        assert!(PasswordHasher::new(&config).is_err());
    }
}
