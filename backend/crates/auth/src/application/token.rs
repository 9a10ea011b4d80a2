//! Token Service
//!
//! Issues and verifies the bearer tokens that carry a caller's identity and
//! role. Stateless: verification needs only the signing secret.

use chrono::Utc;
use platform::token::JwtCodec;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};
use crate::error::AuthResult;

/// Claims embedded in every access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// User id
    pub sub: i64,
    pub email: String,
    pub role: UserRole,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

impl AccessClaims {
    pub fn user_id(&self) -> UserId {
        UserId::from_i64(self.sub)
    }
}

pub struct TokenService {
    codec: JwtCodec,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            codec: JwtCodec::new(&config.jwt_secret),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token for `user_id` expiring after the configured TTL.
    pub fn issue(&self, user_id: UserId, email: &Email, role: UserRole) -> AuthResult<String> {
        let iat = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: user_id.as_i64(),
            email: email.as_str().to_string(),
            role,
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };
        self.sign(&claims)
    }

    /// Sign arbitrary claims as-is.
    pub fn sign(&self, claims: &AccessClaims) -> AuthResult<String> {
        Ok(self.codec.encode(claims)?)
    }

    /// Check signature and expiry and return the claims.
    pub fn verify(&self, token: &str) -> AuthResult<AccessClaims> {
        Ok(self.codec.decode(token)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    fn service() -> TokenService {
        TokenService::new(&AuthConfig::development())
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = service();
        let email = Email::new("mentor@example.com").unwrap();
        let token = tokens
            .issue(UserId::from_i64(2), &email, UserRole::Mentor)
            .unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.user_id(), UserId::from_i64(2));
        assert_eq!(claims.email, "mentor@example.com");
        assert_eq!(claims.role, UserRole::Mentor);
        assert_eq!(claims.exp - claims.iat, AuthConfig::default().token_ttl_secs());
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service();
        let now = Utc::now().timestamp();
        let token = tokens
            .sign(&AccessClaims {
                sub: 1,
                email: "a@example.com".into(),
                role: UserRole::User,
                iat: now - 100,
                exp: now - 10,
            })
            .unwrap();

        assert!(matches!(tokens.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let email = Email::new("a@example.com").unwrap();
        let token = service()
            .issue(UserId::from_i64(1), &email, UserRole::Admin)
            .unwrap();

        assert!(matches!(service().verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let tokens = service();
        let email = Email::new("a@example.com").unwrap();
        let mut token = tokens
            .issue(UserId::from_i64(1), &email, UserRole::User)
            .unwrap();
        token.push('x');

        assert!(matches!(tokens.verify(&token), Err(AuthError::InvalidToken)));
    }
}
