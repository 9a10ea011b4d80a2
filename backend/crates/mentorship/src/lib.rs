//! Mentorship Backend Module
//!
//! Session lifecycle between mentees and mentors:
//! request, accept/reject, review, review deletion.
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, value objects, repository trait
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Users and roles come from the `auth` crate; sessions refer to users by id
//! only and resolve them on demand.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{MenteeRolePolicy, MentorshipConfig, RoleSource};
pub use error::{SessionError, SessionResult};
pub use infra::{InMemorySessionRepository, PgSessionRepository};
pub use presentation::router::{mentorship_router, mentorship_router_generic};
