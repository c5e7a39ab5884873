//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret used when none is configured.
pub const INSECURE_DEFAULT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Authentication and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token lifetime in minutes. Also the window used when
    /// a token is issued without an explicit duration.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Minimum password length for new passwords.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Apply the zxcvbn entropy check to new passwords.
    #[serde(default)]
    pub enforce_password_strength: bool,
    /// Require `password_confirm` to equal `password` on registration.
    #[serde(default)]
    pub require_password_confirmation: bool,
    /// Argon2id work factor for newly hashed passwords.
    #[serde(default)]
    pub argon2: Argon2Config,
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    /// Number of passes.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Degree of parallelism.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            password_min_length: default_password_min(),
            enforce_password_strength: false,
            require_password_confirmation: false,
            argon2: Argon2Config::default(),
        }
    }
}

impl AuthConfig {
    /// Whether the signing secret is still the built-in placeholder.
    pub fn uses_insecure_secret(&self) -> bool {
        self.jwt_secret == INSECURE_DEFAULT_SECRET
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"****")
            .field("jwt_access_ttl_minutes", &self.jwt_access_ttl_minutes)
            .field("password_min_length", &self.password_min_length)
            .field("enforce_password_strength", &self.enforce_password_strength)
            .field(
                "require_password_confirmation",
                &self.require_password_confirmation,
            )
            .field("argon2", &self.argon2)
            .finish()
    }
}

fn default_jwt_secret() -> String {
    INSECURE_DEFAULT_SECRET.to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_password_min() -> usize {
    8
}

fn default_memory_kib() -> u32 {
    19 * 1024
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
