//! Signed bearer tokens (JWT, HS256)
//!
//! Generic over the claim type so each domain crate owns its own claims.
//! Expiry is enforced with zero leeway.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::RngCore;
use rand::rngs::OsRng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Minimum secret length accepted for HS256 signing
pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    Encoding(String),

    #[error("Token has expired")]
    Expired,

    #[error("Token is invalid")]
    Invalid,
}

/// HS256 encoder/decoder bound to one shared secret.
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign `claims`. The claim type must carry an `exp` field.
    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    /// Verify signature and expiry, then deserialize the claims.
    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtCodec")
            .field("algorithm", &"HS256")
            .finish_non_exhaustive()
    }
}

/// Generate a random signing secret (development only).
pub fn random_secret() -> Vec<u8> {
    let mut secret = vec![0u8; 64];
    OsRng.fill_bytes(&mut secret);
    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TestClaims {
        sub: i64,
        exp: u64,
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    #[test]
    fn test_encode_decode() {
        let codec = JwtCodec::new(&random_secret());
        let claims = TestClaims {
            sub: 7,
            exp: now() + 60,
        };

        let token = codec.encode(&claims).unwrap();
        let decoded: TestClaims = codec.decode(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_expired_token() {
        let codec = JwtCodec::new(&random_secret());
        let token = codec
            .encode(&TestClaims {
                sub: 7,
                exp: now() - 10,
            })
            .unwrap();

        let result = codec.decode::<TestClaims>(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret() {
        let issuer = JwtCodec::new(b"first-secret-first-secret-first-secret");
        let verifier = JwtCodec::new(b"other-secret-other-secret-other-secret");
        let token = issuer
            .encode(&TestClaims {
                sub: 1,
                exp: now() + 60,
            })
            .unwrap();

        let result = verifier.decode::<TestClaims>(&token);
        assert!(matches!(result, Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_token() {
        let codec = JwtCodec::new(&random_secret());
        assert!(matches!(
            codec.decode::<TestClaims>("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_random_secret_length() {
        assert!(random_secret().len() >= MIN_SECRET_LENGTH);
        assert_ne!(random_secret(), random_secret());
    }
}
