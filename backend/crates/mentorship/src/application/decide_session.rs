//! Decide Session Use Case
//!
//! The session's mentor accepts or rejects it.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::user_role::UserRole;
use kernel::lock::KeyedLock;

use crate::application::caller::Caller;
use crate::application::config::{MentorshipConfig, RoleSource};
use crate::domain::entities::MentorshipSession;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{Decision, SessionId};
use crate::error::{SessionError, SessionResult};

pub struct DecideSessionUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    sessions: Arc<S>,
    users: Arc<U>,
    locks: Arc<KeyedLock<SessionId>>,
    config: Arc<MentorshipConfig>,
}

impl<S, U> DecideSessionUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub fn new(
        sessions: Arc<S>,
        users: Arc<U>,
        locks: Arc<KeyedLock<SessionId>>,
        config: Arc<MentorshipConfig>,
    ) -> Self {
        Self {
            sessions,
            users,
            locks,
            config,
        }
    }

    pub async fn execute(
        &self,
        caller: Caller,
        session_id: SessionId,
        decision: Decision,
    ) -> SessionResult<MentorshipSession> {
        let _guard = self.locks.lock(session_id).await;

        let mut session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or(SessionError::SessionNotFound)?;

        if !session.is_mentor(caller.user_id) {
            return Err(SessionError::NotSessionMentor);
        }

        if self.caller_role(caller).await? != UserRole::Mentor {
            return Err(SessionError::MentorRoleRequired);
        }

        session.decide(decision, self.config.allow_redecide)?;
        self.sessions.update(&session).await?;

        tracing::info!(
            session_id = %session.session_id,
            status = %session.status,
            "Mentorship session decided"
        );

        Ok(session)
    }

    async fn caller_role(&self, caller: Caller) -> SessionResult<UserRole> {
        match self.config.role_source {
            RoleSource::TokenClaim => Ok(caller.role),
            RoleSource::Directory => self
                .users
                .find_by_id(caller.user_id)
                .await?
                .map(|user| user.user_role)
                .ok_or(SessionError::MentorNotFound),
        }
    }
}
