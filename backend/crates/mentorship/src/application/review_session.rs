//! Review Use Cases
//!
//! The session's mentee attaches, overwrites, or deletes a review.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::models::user_id::UserId;
use kernel::lock::KeyedLock;

use crate::domain::entities::MentorshipSession;
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{Remark, Review, Score, SessionId};
use crate::error::{SessionError, SessionResult};

pub struct ReviewInput {
    pub score: i64,
    pub remark: String,
}

#[derive(Debug)]
pub struct ReviewOutput {
    pub session: MentorshipSession,
    /// Resolved from the user directory at review time
    pub mentee_full_name: String,
}

pub struct ReviewSessionUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    sessions: Arc<S>,
    users: Arc<U>,
    locks: Arc<KeyedLock<SessionId>>,
}

impl<S, U> ReviewSessionUseCase<S, U>
where
    S: SessionRepository,
    U: UserRepository,
{
    pub fn new(sessions: Arc<S>, users: Arc<U>, locks: Arc<KeyedLock<SessionId>>) -> Self {
        Self {
            sessions,
            users,
            locks,
        }
    }

    /// A second review overwrites the first.
    pub async fn execute(
        &self,
        caller_id: UserId,
        session_id: SessionId,
        input: ReviewInput,
    ) -> SessionResult<ReviewOutput> {
        let review = Review {
            score: Score::new(input.score)?,
            remark: Remark::new(input.remark)?,
        };

        let session = {
            let _guard = self.locks.lock(session_id).await;

            let mut session = self
                .sessions
                .find_by_id(session_id)
                .await?
                .ok_or(SessionError::SessionNotFound)?;

            if !session.is_mentee(caller_id) {
                return Err(SessionError::NotSessionMentee);
            }

            session.set_review(review)?;
            self.sessions.update(&session).await?;
            session
        };

        let mentee = self
            .users
            .find_by_id(session.mentee_id)
            .await?
            .ok_or(SessionError::MenteeNotFound)?;

        tracing::info!(
            session_id = %session.session_id,
            mentor_id = %session.mentor_id,
            "Mentorship session reviewed"
        );

        Ok(ReviewOutput {
            session,
            mentee_full_name: mentee.full_name(),
        })
    }
}

pub struct DeleteReviewUseCase<S>
where
    S: SessionRepository,
{
    sessions: Arc<S>,
    locks: Arc<KeyedLock<SessionId>>,
}

impl<S> DeleteReviewUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(sessions: Arc<S>, locks: Arc<KeyedLock<SessionId>>) -> Self {
        Self { sessions, locks }
    }

    pub async fn execute(&self, caller_id: UserId, session_id: SessionId) -> SessionResult<()> {
        let _guard = self.locks.lock(session_id).await;

        let mut session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or(SessionError::SessionNotFound)?;

        if !session.is_mentee(caller_id) {
            return Err(SessionError::NotSessionMentee);
        }

        session.clear_review()?;
        self.sessions.update(&session).await?;

        tracing::info!(session_id = %session.session_id, "Mentorship review deleted");

        Ok(())
    }
}
