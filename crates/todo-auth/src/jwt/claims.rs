//! Claims carried by access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use todo_entity::user::{User, UserRole};

/// Identity asserted by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username.
    pub sub: String,
    /// Numeric user id. Always positive.
    pub user_id: i64,
    /// Role at the time of issuance.
    #[serde(rename = "user_role")]
    pub role: UserRole,
}

impl Claims {
    /// Builds the claims for an authenticated user.
    pub fn for_user(user: &User) -> Self {
        Self {
            sub: user.username.clone(),
            user_id: user.id,
            role: user.role.clone(),
        }
    }
}

/// A freshly signed token together with its expiry instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub access_token: String,
    /// Expiry embedded in the token.
    pub expires_at: DateTime<Utc>,
}

/// The wire payload. Every identity field is optional on the way in so that
/// a signed token with absent claims decodes and can be rejected explicitly.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TokenPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    pub exp: i64,
}

impl TokenPayload {
    pub(crate) fn new(claims: &Claims, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: Some(claims.sub.clone()),
            user_id: Some(claims.user_id),
            user_role: Some(claims.role.as_str().to_string()),
            iat: Some(issued_at.timestamp()),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the claims when every identity field is present and usable.
    pub(crate) fn into_claims(self) -> Option<Claims> {
        let sub = self.sub.filter(|s| !s.is_empty())?;
        let user_id = self.user_id.filter(|id| *id > 0)?;
        let role = self.user_role.filter(|r| !r.is_empty())?;

        Some(Claims {
            sub,
            user_id,
            role: UserRole::new(role),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(sub: Option<&str>, user_id: Option<i64>, role: Option<&str>) -> TokenPayload {
        TokenPayload {
            sub: sub.map(str::to_string),
            user_id,
            user_role: role.map(str::to_string),
            iat: None,
            exp: 0,
        }
    }

    #[test]
    fn test_complete_payload() {
        let claims = payload(Some("jane"), Some(7), Some("user")).into_claims().unwrap();
        assert_eq!(claims.sub, "jane");
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_missing_or_empty_fields() {
        assert!(payload(None, Some(7), Some("user")).into_claims().is_none());
        assert!(payload(Some(""), Some(7), Some("user")).into_claims().is_none());
        assert!(payload(Some("jane"), None, Some("user")).into_claims().is_none());
        assert!(payload(Some("jane"), Some(0), Some("user")).into_claims().is_none());
        assert!(payload(Some("jane"), Some(7), None).into_claims().is_none());
        assert!(payload(Some("jane"), Some(7), Some("")).into_claims().is_none());
    }

    #[test]
    fn test_wire_names() {
        let claims = Claims {
            sub: "jane".to_string(),
            user_id: 7,
            role: UserRole::admin(),
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["user_role"], "admin");
        assert!(json.get("role").is_none());
    }
}
