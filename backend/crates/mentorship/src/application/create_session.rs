//! Create Session Use Case
//!
//! A mentee requests a session with a mentor.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::user_id::UserId;

use crate::domain::entities::{MentorshipSession, NewSession};
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::Questions;
use crate::error::{SessionError, SessionResult};

pub struct CreateSessionInput {
    pub mentor_id: UserId,
    pub questions: String,
}

pub struct CreateSessionUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    sessions: Arc<S>,
    users: Arc<U>,
}

impl<S, U> CreateSessionUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub fn new(sessions: Arc<S>, users: Arc<U>) -> Self {
        Self { sessions, users }
    }

    /// `mentee_id` is the caller. The mentor's role is checked only here.
    pub async fn execute(
        &self,
        mentee_id: UserId,
        input: CreateSessionInput,
    ) -> SessionResult<MentorshipSession> {
        let questions = Questions::new(input.questions)?;

        let mentee = self
            .users
            .find_by_id(mentee_id)
            .await?
            .ok_or(SessionError::MenteeNotFound)?;
        let mentor = self
            .users
            .find_by_id(input.mentor_id)
            .await?
            .ok_or(SessionError::MentorNotFound)?;

        if !mentor.is_mentor() {
            return Err(SessionError::NotAMentor);
        }

        let session = self
            .sessions
            .create(NewSession {
                mentor_id: mentor.user_id,
                mentee_id: mentee.user_id,
                questions,
                mentee_email: mentee.email.into_inner(),
            })
            .await?;

        tracing::info!(
            session_id = %session.session_id,
            mentor_id = %session.mentor_id,
            mentee_id = %session.mentee_id,
            "Mentorship session requested"
        );

        Ok(session)
    }
}
