//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use kernel::error::app_error::AppError;
use kernel::lock::KeyedLock;
use kernel::response::{Envelope, Message};
use std::sync::Arc;

use crate::application::{
    AccessClaims, AuthConfig, GetMentorUseCase, ListMentorsUseCase, PromoteToMentorUseCase,
    SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, TokenService,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;
use crate::presentation::dto::{
    SignInRequest, SignInResponse, SignUpRequest, SignUpResponse, UserResponse,
};
use crate::presentation::middleware::require_admin;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
    /// Serializes role changes per user
    pub user_locks: Arc<KeyedLock<UserId>>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        let tokens = TokenService::new(&config);
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            user_locks: Arc::new(KeyedLock::new()),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> AuthResult<Envelope<SignUpResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: req.password,
        address: req.address,
        bio: req.bio,
        occupation: req.occupation,
        expertise: req.expertise,
    };

    let user = use_case.execute(input).await?;

    Ok(Envelope::created(SignUpResponse {
        message: "User created successfully".to_string(),
        user: user.into(),
    }))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> AuthResult<Envelope<SignInResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Envelope::ok(SignInResponse {
        message: "User successfully logged in".to_string(),
        token: output.token,
        user_id: output.user.user_id,
    }))
}

// ============================================================================
// Mentors (bearer required)
// ============================================================================

/// GET /mentors
pub async fn list_mentors<R>(
    State(state): State<AuthAppState<R>>,
    _claims: AccessClaims,
) -> AuthResult<Envelope<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let mentors = ListMentorsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Envelope::ok(
        mentors.into_iter().map(UserResponse::from).collect(),
    ))
}

/// GET /mentors/{id}
pub async fn get_mentor<R>(
    State(state): State<AuthAppState<R>>,
    _claims: AccessClaims,
    path: Result<Path<i64>, PathRejection>,
) -> AuthResult<Envelope<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Path(mentor_id) = path.map_err(AppError::from)?;

    let mentor = GetMentorUseCase::new(state.repo.clone())
        .execute(UserId::from_i64(mentor_id))
        .await?;

    Ok(Envelope::ok(mentor.into()))
}

/// PATCH /mentors/{id}/promote (ADMIN only)
pub async fn promote_to_mentor<R>(
    State(state): State<AuthAppState<R>>,
    claims: AccessClaims,
    path: Result<Path<i64>, PathRejection>,
) -> AuthResult<Envelope<Message>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    require_admin(&claims)?;
    let Path(user_id) = path.map_err(AppError::from)?;

    PromoteToMentorUseCase::new(state.repo.clone(), state.user_locks.clone())
        .execute(UserId::from_i64(user_id))
        .await?;

    Ok(Envelope::ok(Message::new("User successfully promoted to mentor")))
}
