//! Mentorship Error Types
//!
//! Session-lifecycle error variants that integrate with the unified
//! `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Mentorship-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Mentee not found")]
    MenteeNotFound,

    #[error("Mentor not found")]
    MentorNotFound,

    /// Target user exists but is not a MENTOR
    #[error("User is not a mentor")]
    NotAMentor,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Unauthorized to update this session")]
    NotSessionMentor,

    /// Caller's role is not MENTOR
    #[error("Only mentors can accept or reject sessions")]
    MentorRoleRequired,

    #[error("Unauthorized to review this session")]
    NotSessionMentee,

    /// Role claim cannot list sessions
    #[error("Invalid user role")]
    InvalidRole,

    #[error("Cannot review a session that is not approved or rejected")]
    SessionNotDecided,

    #[error("No review exists for this session")]
    NoReviewExists,

    /// Only raised when re-deciding is disabled
    #[error("Session has already been decided")]
    AlreadyDecided,

    #[error("{0}")]
    Validation(AppError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SessionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SessionError::Auth(e) => e.status_code(),
            _ => StatusCode::from_u16(self.kind().status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::MenteeNotFound
            | SessionError::MentorNotFound
            | SessionError::SessionNotFound => ErrorKind::NotFound,
            SessionError::NotAMentor
            | SessionError::SessionNotDecided
            | SessionError::NoReviewExists => ErrorKind::BadRequest,
            SessionError::NotSessionMentor
            | SessionError::MentorRoleRequired
            | SessionError::NotSessionMentee
            | SessionError::InvalidRole => ErrorKind::Forbidden,
            SessionError::AlreadyDecided => ErrorKind::Conflict,
            SessionError::Validation(e) => e.kind(),
            SessionError::Auth(e) => e.kind(),
            SessionError::Database(_) | SessionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError. Server-side details stay out of the message.
    pub fn to_app_error(&self) -> AppError {
        match self {
            SessionError::Auth(e) => e.to_app_error(),
            SessionError::Validation(e) => {
                let app = AppError::new(e.kind(), e.message().to_string());
                match e.action() {
                    Some(action) => app.with_action(action.to_string()),
                    None => app,
                }
            }
            SessionError::Database(_) | SessionError::Internal(_) => {
                AppError::internal("An unexpected error occurred")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SessionError::Database(e) => {
                tracing::error!(error = %e, "Mentorship database error");
            }
            SessionError::Internal(msg) => {
                tracing::error!(message = %msg, "Mentorship internal error");
            }
            SessionError::Auth(e) => e.log(),
            SessionError::NotSessionMentor
            | SessionError::MentorRoleRequired
            | SessionError::NotSessionMentee
            | SessionError::InvalidRole => {
                tracing::warn!(error = %self, "Mentorship access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Mentorship error");
            }
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for SessionError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            SessionError::Internal(err.to_string())
        } else {
            SessionError::Validation(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        use SessionError::*;

        for (err, status) in [
            (MenteeNotFound, StatusCode::NOT_FOUND),
            (MentorNotFound, StatusCode::NOT_FOUND),
            (SessionNotFound, StatusCode::NOT_FOUND),
            (NotAMentor, StatusCode::BAD_REQUEST),
            (SessionNotDecided, StatusCode::BAD_REQUEST),
            (NoReviewExists, StatusCode::BAD_REQUEST),
            (NotSessionMentor, StatusCode::FORBIDDEN),
            (MentorRoleRequired, StatusCode::FORBIDDEN),
            (NotSessionMentee, StatusCode::FORBIDDEN),
            (InvalidRole, StatusCode::FORBIDDEN),
            (AlreadyDecided, StatusCode::CONFLICT),
            (Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ] {
            assert_eq!(err.status_code(), status, "{err}");
        }
    }

    #[test]
    fn test_auth_errors_pass_through() {
        let err = SessionError::from(AuthError::InvalidToken);
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_app_error().message(), "Invalid or expired token");
    }

    #[test]
    fn test_validation_is_client_error() {
        let err = SessionError::from(AppError::bad_request("Questions are required"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_app_error().message(), "Questions are required");
    }
}
