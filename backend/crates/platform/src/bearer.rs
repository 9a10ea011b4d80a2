//! `Authorization: Bearer <token>` header parsing

use http::HeaderMap;
use http::header::AUTHORIZATION;
use thiserror::Error;

pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Authorization header is missing")]
    Missing,

    #[error("Authorization header must use the Bearer scheme")]
    MalformedScheme,
}

/// Extract the raw token from the `Authorization` header.
///
/// The prefix match is case-sensitive and the token must be non-empty.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::MalformedScheme)?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(BearerError::MalformedScheme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer(&headers("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), Err(BearerError::Missing));
    }

    #[test]
    fn test_wrong_scheme() {
        assert_eq!(
            extract_bearer(&headers("Basic dXNlcjpwYXNz")),
            Err(BearerError::MalformedScheme)
        );
        assert_eq!(
            extract_bearer(&headers("bearer abc")),
            Err(BearerError::MalformedScheme)
        );
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(
            extract_bearer(&headers("Bearer ")),
            Err(BearerError::MalformedScheme)
        );
    }
}
