//! Auth Middleware
//!
//! Bearer-token authentication for protected routes and the role guard.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::token::{AccessClaims, TokenService};
use crate::error::{AuthError, AuthResult};

/// Middleware that requires a valid bearer token.
///
/// Verified claims are stored in the request extensions, where handlers
/// pick them up through the `AccessClaims` extractor.
pub async fn require_bearer(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers())?;
    let claims = tokens.verify(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AccessClaims
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AccessClaims>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}

/// Admin guard over the token claim.
pub fn require_admin(claims: &AccessClaims) -> AuthResult<()> {
    if claims.role.is_admin() {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
