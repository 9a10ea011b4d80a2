//! Application Layer
//!
//! Use cases for the session lifecycle.

pub mod caller;
pub mod config;
pub mod create_session;
pub mod decide_session;
pub mod list_sessions;
pub mod review_session;

// Re-exports
pub use caller::Caller;
pub use config::{MenteeRolePolicy, MentorshipConfig, RoleSource};
pub use create_session::{CreateSessionInput, CreateSessionUseCase};
pub use decide_session::DecideSessionUseCase;
pub use list_sessions::ListSessionsUseCase;
pub use review_session::{DeleteReviewUseCase, ReviewInput, ReviewOutput, ReviewSessionUseCase};
