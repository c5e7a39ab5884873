//! Password policy enforcement for new passwords.

use todo_core::config::AuthConfig;

use crate::error::AuthError;

/// Validates new passwords against the configured policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length in characters.
    min_length: usize,
    /// Whether the entropy check runs.
    enforce_strength: bool,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
            enforce_strength: config.enforce_password_strength,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AuthError> {
        if password.chars().count() < self.min_length {
            return Err(AuthError::Validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if self.enforce_strength {
            let estimate = zxcvbn::zxcvbn(password, &[]);
            if estimate.score() < zxcvbn::Score::Three {
                return Err(AuthError::Validation(
                    "Password is too weak. Please use a stronger password with more entropy."
                        .to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(&self, old_password: &str, new_password: &str) -> Result<(), AuthError> {
        if old_password == new_password {
            return Err(AuthError::Validation(
                "New password must be different from the current password".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fast_config;

    #[test]
    fn test_min_length() {
        let validator = PasswordValidator::new(&fast_config());
        assert!(validator.validate("12345aA@").is_ok());
        assert!(matches!(
            validator.validate("1234aA@"),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_strength_only_when_enforced() {
        let mut config = fast_config();
        assert!(PasswordValidator::new(&config).validate("password").is_ok());

        config.enforce_password_strength = true;
        let strict = PasswordValidator::new(&config);
        assert!(strict.validate("password").is_err());
        assert!(strict.validate("correct-horse-battery-staple-91").is_ok());
    }

    #[test]
    fn test_not_same() {
        let validator = PasswordValidator::new(&fast_config());
        assert!(validator.validate_not_same("a", "a").is_err());
        assert!(validator.validate_not_same("a", "b").is_ok());
    }
}
