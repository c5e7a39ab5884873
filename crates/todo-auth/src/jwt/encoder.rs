//! Access token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use todo_core::config::AuthConfig;

use super::claims::{Claims, IssuedToken, TokenPayload};
use crate::error::AuthError;

/// Signs access tokens with HS256.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Validity window applied when the caller does not supply one.
    default_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("default_ttl", &self.default_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            default_ttl: i64::try_from(config.jwt_access_ttl_minutes)
                .ok()
                .and_then(Duration::try_minutes)
                .unwrap_or(Duration::MAX),
        }
    }

    /// The window used by [`issue`](Self::issue) when no ttl is given.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Signs `claims` with an explicit expiry instant.
    pub fn encode(&self, claims: &Claims, expires_at: DateTime<Utc>) -> Result<String, AuthError> {
        let payload = TokenPayload::new(claims, Utc::now(), expires_at);

        encode(&Header::new(Algorithm::HS256), &payload, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to encode access token: {e}")))
    }

    /// Signs `claims` valid for `ttl`, or for the configured default window.
    pub fn issue(&self, claims: &Claims, ttl: Option<Duration>) -> Result<IssuedToken, AuthError> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Internal(format!("Token lifetime out of range: {ttl}")))?;
        let access_token = self.encode(claims, expires_at)?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }
}
