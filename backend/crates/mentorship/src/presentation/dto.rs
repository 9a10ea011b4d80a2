//! API DTOs (Data Transfer Objects)

use auth::models::user_id::UserId;
use serde::{Deserialize, Serialize};

use crate::application::ReviewOutput;
use crate::domain::entities::MentorshipSession;
use crate::domain::value_objects::{SessionId, SessionStatus};

/// `data` of `GET /sessions/all` when the caller has no sessions
pub const NO_SESSIONS_MESSAGE: &str = "No sessions found for the user.";

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub mentor_id: i64,
    #[serde(default)]
    pub questions: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub score: i64,
    #[serde(default)]
    pub remark: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Session projection. `score` and `remark` are omitted without a review.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub mentor_id: UserId,
    pub mentee_id: UserId,
    pub questions: String,
    pub mentee_email: String,
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl From<MentorshipSession> for SessionResponse {
    fn from(session: MentorshipSession) -> Self {
        let (score, remark) = match session.review {
            Some(review) => (
                Some(review.score.value()),
                Some(review.remark.as_str().to_string()),
            ),
            None => (None, None),
        };

        Self {
            session_id: session.session_id,
            mentor_id: session.mentor_id,
            mentee_id: session.mentee_id,
            questions: session.questions.as_str().to_string(),
            mentee_email: session.mentee_email,
            status: session.status,
            score,
            remark,
        }
    }
}

/// Either the caller's sessions or the empty indicator string
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SessionListResponse {
    Sessions(Vec<SessionResponse>),
    Empty(&'static str),
}

impl From<Vec<MentorshipSession>> for SessionListResponse {
    fn from(sessions: Vec<MentorshipSession>) -> Self {
        if sessions.is_empty() {
            SessionListResponse::Empty(NO_SESSIONS_MESSAGE)
        } else {
            SessionListResponse::Sessions(sessions.into_iter().map(Into::into).collect())
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub session_id: SessionId,
    pub mentor_id: UserId,
    pub mentee_id: UserId,
    pub mentee_full_name: String,
    pub score: Option<u8>,
    pub remark: Option<String>,
}

impl From<ReviewOutput> for ReviewResponse {
    fn from(output: ReviewOutput) -> Self {
        let session = output.session;
        Self {
            session_id: session.session_id,
            mentor_id: session.mentor_id,
            mentee_id: session.mentee_id,
            mentee_full_name: output.mentee_full_name,
            score: session.review.as_ref().map(|r| r.score.value()),
            remark: session.review.map(|r| r.remark.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewSession;
    use crate::domain::value_objects::{Decision, Questions, Remark, Review, Score};
    use chrono::Utc;

    fn session() -> MentorshipSession {
        MentorshipSession::from_new(
            SessionId::from_i64(3),
            NewSession {
                mentor_id: UserId::from_i64(2),
                mentee_id: UserId::from_i64(1),
                questions: Questions::new("How to grow?").unwrap(),
                mentee_email: "mentee@example.com".to_string(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_session_without_review_omits_fields() {
        let body = serde_json::to_value(SessionResponse::from(session())).unwrap();
        assert_eq!(body["sessionId"], 3);
        assert_eq!(body["mentorId"], 2);
        assert_eq!(body["menteeId"], 1);
        assert_eq!(body["menteeEmail"], "mentee@example.com");
        assert_eq!(body["status"], "PENDING");
        assert!(body.get("score").is_none());
        assert!(body.get("remark").is_none());
    }

    #[test]
    fn test_session_with_review() {
        let mut s = session();
        s.decide(Decision::Accept, true).unwrap();
        s.set_review(Review {
            score: Score::new(4).unwrap(),
            remark: Remark::new("Helpful").unwrap(),
        })
        .unwrap();

        let body = serde_json::to_value(SessionResponse::from(s)).unwrap();
        assert_eq!(body["status"], "APPROVED");
        assert_eq!(body["score"], 4);
        assert_eq!(body["remark"], "Helpful");
    }

    #[test]
    fn test_empty_list_indicator() {
        let body = serde_json::to_value(SessionListResponse::from(Vec::new())).unwrap();
        assert_eq!(body, serde_json::json!(NO_SESSIONS_MESSAGE));

        let body = serde_json::to_value(SessionListResponse::from(vec![session()])).unwrap();
        assert!(body.is_array());
    }
}
