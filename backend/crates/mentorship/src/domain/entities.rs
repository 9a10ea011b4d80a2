//! Domain Entities
//!
//! The mentorship session and its lifecycle rules.

use auth::models::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_objects::{Decision, Questions, Review, SessionId, SessionStatus};
use crate::error::{SessionError, SessionResult};

/// A session request that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewSession {
    pub mentor_id: UserId,
    pub mentee_id: UserId,
    pub questions: Questions,
    /// Mentee email at request time
    pub mentee_email: String,
}

/// Mentorship session entity
///
/// `review` is set only while `status` is decided; nothing moves `status`
/// back to PENDING.
#[derive(Debug, Clone)]
pub struct MentorshipSession {
    pub session_id: SessionId,
    pub mentor_id: UserId,
    pub mentee_id: UserId,
    pub questions: Questions,
    pub mentee_email: String,
    pub status: SessionStatus,
    pub review: Option<Review>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MentorshipSession {
    /// Materialize a stored session from its insert form; starts PENDING.
    pub fn from_new(session_id: SessionId, new_session: NewSession, now: DateTime<Utc>) -> Self {
        Self {
            session_id,
            mentor_id: new_session.mentor_id,
            mentee_id: new_session.mentee_id,
            questions: new_session.questions,
            mentee_email: new_session.mentee_email,
            status: SessionStatus::Pending,
            review: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_mentor(&self, user_id: UserId) -> bool {
        self.mentor_id == user_id
    }

    pub fn is_mentee(&self, user_id: UserId) -> bool {
        self.mentee_id == user_id
    }

    /// Apply a mentor decision.
    ///
    /// With `allow_redecide` a decided session may be flipped between
    /// APPROVED and REJECTED; otherwise it fails with `AlreadyDecided`.
    pub fn decide(&mut self, decision: Decision, allow_redecide: bool) -> SessionResult<()> {
        if self.status.is_decided() && !allow_redecide {
            return Err(SessionError::AlreadyDecided);
        }
        self.status = decision.target_status();
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Attach or overwrite the review. Only decided sessions can be reviewed.
    pub fn set_review(&mut self, review: Review) -> SessionResult<()> {
        if !self.status.is_decided() {
            return Err(SessionError::SessionNotDecided);
        }
        self.review = Some(review);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn clear_review(&mut self) -> SessionResult<()> {
        if self.review.take().is_none() {
            return Err(SessionError::NoReviewExists);
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Remark, Score};

    fn pending() -> MentorshipSession {
        MentorshipSession::from_new(
            SessionId::from_i64(1),
            NewSession {
                mentor_id: UserId::from_i64(2),
                mentee_id: UserId::from_i64(1),
                questions: Questions::new("How to grow?").unwrap(),
                mentee_email: "mentee@example.com".to_string(),
            },
            Utc::now(),
        )
    }

    fn review(score: i64) -> Review {
        Review {
            score: Score::new(score).unwrap(),
            remark: Remark::new("Helpful").unwrap(),
        }
    }

    #[test]
    fn test_new_session_is_pending() {
        let session = pending();
        assert_eq!(session.status, SessionStatus::Pending);
        assert!(session.review.is_none());
        assert!(session.is_mentor(UserId::from_i64(2)));
        assert!(session.is_mentee(UserId::from_i64(1)));
    }

    #[test]
    fn test_decide_and_redecide() {
        let mut session = pending();
        session.decide(Decision::Accept, true).unwrap();
        assert_eq!(session.status, SessionStatus::Approved);

        session.decide(Decision::Reject, true).unwrap();
        assert_eq!(session.status, SessionStatus::Rejected);
    }

    #[test]
    fn test_redecide_disallowed() {
        let mut session = pending();
        session.decide(Decision::Reject, false).unwrap();
        assert!(matches!(
            session.decide(Decision::Accept, false),
            Err(SessionError::AlreadyDecided)
        ));
        assert_eq!(session.status, SessionStatus::Rejected);
    }

    #[test]
    fn test_review_requires_decision() {
        let mut session = pending();
        assert!(matches!(
            session.set_review(review(4)),
            Err(SessionError::SessionNotDecided)
        ));

        session.decide(Decision::Reject, true).unwrap();
        session.set_review(review(2)).unwrap();
        session.set_review(review(5)).unwrap();
        assert_eq!(session.review.as_ref().map(|r| r.score.value()), Some(5));
    }

    #[test]
    fn test_clear_review() {
        let mut session = pending();
        assert!(matches!(
            session.clear_review(),
            Err(SessionError::NoReviewExists)
        ));

        session.decide(Decision::Accept, true).unwrap();
        session.set_review(review(4)).unwrap();
        session.clear_review().unwrap();
        assert!(session.review.is_none());
        assert_eq!(session.status, SessionStatus::Approved);
    }
}
