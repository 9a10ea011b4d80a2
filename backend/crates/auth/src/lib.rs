//! Auth (Identity) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Signup/signin with email + password
//! - Signed bearer tokens carrying `{userId, email, role}`
//! - Mentor directory and admin-only promotion to MENTOR
//! - Default admin account bootstrap
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Identical error for unknown email and wrong password
//! - Tokens are HS256 JWTs, verified on every protected request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AdminBootstrap, AuthConfig};
pub use application::token::{AccessClaims, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
