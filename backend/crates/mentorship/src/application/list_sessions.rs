//! List Sessions Use Case
//!
//! Sessions for the caller, as mentor or as mentee depending on the role
//! claim and the configured mentee policy.

use std::sync::Arc;

use auth::domain::repository::UserRepository;

use crate::application::caller::Caller;
use crate::application::config::MentorshipConfig;
use crate::domain::entities::MentorshipSession;
use crate::domain::repository::SessionRepository;
use crate::error::{SessionError, SessionResult};

pub struct ListSessionsUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    sessions: Arc<S>,
    users: Arc<U>,
    config: Arc<MentorshipConfig>,
}

impl<S, U> ListSessionsUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub fn new(sessions: Arc<S>, users: Arc<U>, config: Arc<MentorshipConfig>) -> Self {
        Self {
            sessions,
            users,
            config,
        }
    }

    /// An empty list is a normal result.
    pub async fn execute(&self, caller: Caller) -> SessionResult<Vec<MentorshipSession>> {
        if caller.role.is_mentor() {
            self.users
                .find_by_id(caller.user_id)
                .await?
                .ok_or(SessionError::MentorNotFound)?;
            return self.sessions.list_by_mentor(caller.user_id).await;
        }

        if self.config.mentee_role_policy.lists_as_mentee(caller.role) {
            self.users
                .find_by_id(caller.user_id)
                .await?
                .ok_or(SessionError::MenteeNotFound)?;
            return self.sessions.list_by_mentee(caller.user_id).await;
        }

        Err(SessionError::InvalidRole)
    }
}
