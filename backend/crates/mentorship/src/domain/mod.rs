//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{MentorshipSession, NewSession};
pub use repository::SessionRepository;
pub use value_objects::{Decision, Questions, Remark, Review, Score, SessionId, SessionStatus};
