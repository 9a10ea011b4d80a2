//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_bearer;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(AuthAppState::new(repo, config))
}

/// Create a generic Auth router for any repository implementation.
///
/// `/auth/*` is public; `/mentors/*` requires a bearer token.
pub fn auth_router_generic<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let public = Router::new()
        .route("/auth/signup", post(handlers::sign_up::<R>))
        .route("/auth/signin", post(handlers::sign_in::<R>));

    let protected = Router::new()
        .route("/mentors", get(handlers::list_mentors::<R>))
        .route("/mentors/{id}", get(handlers::get_mentor::<R>))
        .route("/mentors/{id}/promote", patch(handlers::promote_to_mentor::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            require_bearer,
        ));

    public.merge(protected).with_state(state)
}
