//! Repository Traits

use auth::models::user_id::UserId;

use crate::domain::entities::{MentorshipSession, NewSession};
use crate::domain::value_objects::SessionId;
use crate::error::SessionResult;

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Insert a session and return it with its assigned id
    async fn create(&self, new_session: NewSession) -> SessionResult<MentorshipSession>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: SessionId) -> SessionResult<Option<MentorshipSession>>;

    /// Sessions where `mentor_id` is the mentor, oldest first
    async fn list_by_mentor(&self, mentor_id: UserId) -> SessionResult<Vec<MentorshipSession>>;

    /// Sessions where `mentee_id` is the mentee, oldest first
    async fn list_by_mentee(&self, mentee_id: UserId) -> SessionResult<Vec<MentorshipSession>>;

    /// Persist status and review of an existing session
    async fn update(&self, session: &MentorshipSession) -> SessionResult<()>;
}
