//! PostgreSQL Repository Implementation

use auth::models::user_id::UserId;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{MentorshipSession, NewSession};
use crate::domain::repository::SessionRepository;
use crate::domain::value_objects::{Questions, Remark, Review, Score, SessionId, SessionStatus};
use crate::error::{SessionError, SessionResult};

const SESSION_COLUMNS: &str = r#"
    id,
    mentor_id,
    mentee_id,
    questions,
    mentee_email,
    status,
    score,
    remark,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed session repository
#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionRepository for PgSessionRepository {
    async fn create(&self, new_session: NewSession) -> SessionResult<MentorshipSession> {
        let sql = format!(
            r#"
            INSERT INTO mentorship_sessions (
                mentor_id,
                mentee_id,
                questions,
                mentee_email,
                status
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING {SESSION_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(new_session.mentor_id.as_i64())
            .bind(new_session.mentee_id.as_i64())
            .bind(new_session.questions.as_str())
            .bind(&new_session.mentee_email)
            .bind(SessionStatus::Pending.code())
            .fetch_one(&self.pool)
            .await?;

        row.into_session()
    }

    async fn find_by_id(&self, session_id: SessionId) -> SessionResult<Option<MentorshipSession>> {
        let sql = format!("SELECT {SESSION_COLUMNS} FROM mentorship_sessions WHERE id = $1");

        let row = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(session_id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.map(SessionRow::into_session).transpose()
    }

    async fn list_by_mentor(&self, mentor_id: UserId) -> SessionResult<Vec<MentorshipSession>> {
        let sql = format!(
            "SELECT {SESSION_COLUMNS} FROM mentorship_sessions WHERE mentor_id = $1 ORDER BY id"
        );

        let rows = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(mentor_id.as_i64())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(SessionRow::into_session).collect()
    }

    async fn list_by_mentee(&self, mentee_id: UserId) -> SessionResult<Vec<MentorshipSession>> {
        let sql = format!(
            "SELECT {SESSION_COLUMNS} FROM mentorship_sessions WHERE mentee_id = $1 ORDER BY id"
        );

        let rows = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(mentee_id.as_i64())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(SessionRow::into_session).collect()
    }

    async fn update(&self, session: &MentorshipSession) -> SessionResult<()> {
        let (score, remark) = match &session.review {
            Some(review) => (
                Some(i16::from(review.score.value())),
                Some(review.remark.as_str()),
            ),
            None => (None, None),
        };

        let result = sqlx::query(
            r#"
            UPDATE mentorship_sessions
            SET status = $2, score = $3, remark = $4, updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(session.session_id.as_i64())
        .bind(session.status.code())
        .bind(score)
        .bind(remark)
        .bind(session.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(SessionError::SessionNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i64,
    mentor_id: i64,
    mentee_id: i64,
    questions: String,
    mentee_email: String,
    status: String,
    score: Option<i16>,
    remark: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> SessionResult<MentorshipSession> {
        let status = SessionStatus::from_code(&self.status).ok_or_else(|| {
            SessionError::Internal(format!("Unknown session status in database: {}", self.status))
        })?;

        let review = match (self.score, self.remark) {
            (Some(score), remark) => Some(Review {
                score: Score::new(i64::from(score))?,
                remark: Remark::from_db(remark.unwrap_or_default()),
            }),
            (None, _) => None,
        };

        Ok(MentorshipSession {
            session_id: SessionId::from_i64(self.id),
            mentor_id: UserId::from_i64(self.mentor_id),
            mentee_id: UserId::from_i64(self.mentee_id),
            questions: Questions::from_db(self.questions),
            mentee_email: self.mentee_email,
            status,
            review,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
