//! Mentorship Router

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::middleware::require_bearer;
use auth::{PgUserRepository, TokenService};
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::application::config::MentorshipConfig;
use crate::domain::repository::SessionRepository;
use crate::infra::postgres::PgSessionRepository;
use crate::presentation::handlers::{self, MentorshipAppState};

/// Create the Mentorship router with PostgreSQL repositories
pub fn mentorship_router(
    sessions: PgSessionRepository,
    users: PgUserRepository,
    config: MentorshipConfig,
    tokens: Arc<TokenService>,
) -> Router {
    mentorship_router_generic(MentorshipAppState::new(sessions, users, config), tokens)
}

/// Create a generic Mentorship router for any repository implementation.
///
/// `tokens` must verify with the same secret the auth router signs with.
pub fn mentorship_router_generic<S, U>(
    state: MentorshipAppState<S, U>,
    tokens: Arc<TokenService>,
) -> Router
where
    S: SessionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/sessions", post(handlers::create_session::<S, U>))
        .route("/sessions/all", get(handlers::list_sessions::<S, U>))
        .route(
            "/sessions/{id}/accept",
            patch(handlers::accept_session::<S, U>),
        )
        .route(
            "/sessions/{id}/reject",
            patch(handlers::reject_session::<S, U>),
        )
        .route(
            "/sessions/{id}/review",
            post(handlers::review_session::<S, U>).delete(handlers::delete_review::<S, U>),
        )
        .route_layer(middleware::from_fn_with_state(tokens, require_bearer))
        .with_state(state)
}
