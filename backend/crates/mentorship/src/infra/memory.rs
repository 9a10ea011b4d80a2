//! In-memory Repository Implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use auth::models::user_id::UserId;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entities::{MentorshipSession, NewSession};
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::SessionId;
use crate::error::{SessionError, SessionResult};

#[derive(Default)]
struct Sessions {
    last_id: i64,
    by_id: BTreeMap<SessionId, MentorshipSession>,
}

impl Sessions {
    fn filtered(&self, keep: impl Fn(&MentorshipSession) -> bool) -> Vec<MentorshipSession> {
        self.by_id.values().filter(|&s| keep(s)).cloned().collect()
    }
}

/// Clones share the same store.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    inner: Arc<RwLock<Sessions>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, new_session: NewSession) -> SessionResult<MentorshipSession> {
        let mut sessions = self.inner.write().await;

        sessions.last_id += 1;
        let session_id = SessionId::from_i64(sessions.last_id);
        let session = MentorshipSession::from_new(session_id, new_session, Utc::now());
        sessions.by_id.insert(session_id, session.clone());

        Ok(session)
    }

    async fn find_by_id(&self, session_id: SessionId) -> SessionResult<Option<MentorshipSession>> {
        Ok(self.inner.read().await.by_id.get(&session_id).cloned())
    }

    async fn list_by_mentor(&self, mentor_id: UserId) -> SessionResult<Vec<MentorshipSession>> {
        Ok(self.inner.read().await.filtered(|s| s.mentor_id == mentor_id))
    }

    async fn list_by_mentee(&self, mentee_id: UserId) -> SessionResult<Vec<MentorshipSession>> {
        Ok(self.inner.read().await.filtered(|s| s.mentee_id == mentee_id))
    }

    async fn update(&self, session: &MentorshipSession) -> SessionResult<()> {
        let mut sessions = self.inner.write().await;
        let stored = sessions
            .by_id
            .get_mut(&session.session_id)
            .ok_or(SessionError::SessionNotFound)?;

        stored.status = session.status;
        stored.review = session.review.clone();
        stored.updated_at = session.updated_at;

        Ok(())
    }
}
