//! HTTP Handlers
//!
//! Every route sits behind `require_bearer`; the caller comes from the
//! verified token claims.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use auth::AccessClaims;
use auth::domain::repository::UserRepository;
use auth::models::user_id::UserId;
use kernel::error::app_error::AppError;
use kernel::lock::KeyedLock;
use kernel::response::{Envelope, Message};
use std::sync::Arc;

use crate::application::{
    Caller, CreateSessionInput, CreateSessionUseCase, DecideSessionUseCase, DeleteReviewUseCase,
    ListSessionsUseCase, MentorshipConfig, ReviewInput, ReviewSessionUseCase,
};
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{Decision, SessionId};
use crate::error::SessionResult;
use crate::presentation::dto::{
    CreateSessionRequest, ReviewRequest, ReviewResponse, SessionListResponse, SessionResponse,
};

/// Shared state for mentorship handlers
#[derive(Clone)]
pub struct MentorshipAppState<S, U>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
    pub users: Arc<U>,
    pub config: Arc<MentorshipConfig>,
    /// Serializes status and review changes per session
    pub session_locks: Arc<KeyedLock<SessionId>>,
}

impl<S, U> MentorshipAppState<S, U>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(sessions: S, users: U, config: MentorshipConfig) -> Self {
        Self {
            sessions: Arc::new(sessions),
            users: Arc::new(users),
            config: Arc::new(config),
            session_locks: Arc::new(KeyedLock::new()),
        }
    }
}

// ============================================================================
// Create
// ============================================================================

/// POST /sessions
pub async fn create_session<S, U>(
    State(state): State<MentorshipAppState<S, U>>,
    claims: AccessClaims,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> SessionResult<Envelope<SessionResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let session = CreateSessionUseCase::new(state.sessions.clone(), state.users.clone())
        .execute(
            claims.user_id(),
            CreateSessionInput {
                mentor_id: UserId::from_i64(req.mentor_id),
                questions: req.questions,
            },
        )
        .await?;

    Ok(Envelope::created(session.into()))
}

// ============================================================================
// Accept / Reject
// ============================================================================

/// PATCH /sessions/{id}/accept
pub async fn accept_session<S, U>(
    state: State<MentorshipAppState<S, U>>,
    claims: AccessClaims,
    path: Result<Path<i64>, PathRejection>,
) -> SessionResult<Envelope<SessionResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    decide(state, claims, path, Decision::Accept).await
}

/// PATCH /sessions/{id}/reject
pub async fn reject_session<S, U>(
    state: State<MentorshipAppState<S, U>>,
    claims: AccessClaims,
    path: Result<Path<i64>, PathRejection>,
) -> SessionResult<Envelope<SessionResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    decide(state, claims, path, Decision::Reject).await
}

async fn decide<S, U>(
    State(state): State<MentorshipAppState<S, U>>,
    claims: AccessClaims,
    path: Result<Path<i64>, PathRejection>,
    decision: Decision,
) -> SessionResult<Envelope<SessionResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(session_id) = path.map_err(AppError::from)?;

    let session = DecideSessionUseCase::new(
        state.sessions.clone(),
        state.users.clone(),
        state.session_locks.clone(),
        state.config.clone(),
    )
    .execute(
        Caller::from(&claims),
        SessionId::from_i64(session_id),
        decision,
    )
    .await?;

    Ok(Envelope::ok(session.into()))
}

// ============================================================================
// List
// ============================================================================

/// GET /sessions/all
pub async fn list_sessions<S, U>(
    State(state): State<MentorshipAppState<S, U>>,
    claims: AccessClaims,
) -> SessionResult<Envelope<SessionListResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let sessions = ListSessionsUseCase::new(
        state.sessions.clone(),
        state.users.clone(),
        state.config.clone(),
    )
    .execute(Caller::from(&claims))
    .await?;

    Ok(Envelope::ok(sessions.into()))
}

// ============================================================================
// Review
// ============================================================================

/// POST /sessions/{id}/review
pub async fn review_session<S, U>(
    State(state): State<MentorshipAppState<S, U>>,
    claims: AccessClaims,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> SessionResult<Envelope<ReviewResponse>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(session_id) = path.map_err(AppError::from)?;
    let Json(req) = payload.map_err(AppError::from)?;

    let output = ReviewSessionUseCase::new(
        state.sessions.clone(),
        state.users.clone(),
        state.session_locks.clone(),
    )
    .execute(
        claims.user_id(),
        SessionId::from_i64(session_id),
        ReviewInput {
            score: req.score,
            remark: req.remark,
        },
    )
    .await?;

    Ok(Envelope::created(output.into()))
}

/// DELETE /sessions/{id}/review
pub async fn delete_review<S, U>(
    State(state): State<MentorshipAppState<S, U>>,
    claims: AccessClaims,
    path: Result<Path<i64>, PathRejection>,
) -> SessionResult<Envelope<Message>>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(session_id) = path.map_err(AppError::from)?;

    DeleteReviewUseCase::new(state.sessions.clone(), state.session_locks.clone())
        .execute(claims.user_id(), SessionId::from_i64(session_id))
        .await?;

    Ok(Envelope::ok(Message::new("Review successfully deleted")))
}
