//! Domain Value Objects
//!
//! Immutable value types for the mentorship domain.

use kernel::error::app_error::{AppError, AppResult};
use kernel::id::Id;
use serde::{Deserialize, Serialize};
use std::fmt;

pub struct SessionMarker;
pub type SessionId = Id<SessionMarker>;

/// Lifecycle status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SessionStatus {
    pub const fn code(&self) -> &'static str {
        match self {
            SessionStatus::Pending => "PENDING",
            SessionStatus::Approved => "APPROVED",
            SessionStatus::Rejected => "REJECTED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PENDING" => Some(SessionStatus::Pending),
            "APPROVED" => Some(SessionStatus::Approved),
            "REJECTED" => Some(SessionStatus::Rejected),
            _ => None,
        }
    }

    /// APPROVED or REJECTED
    pub const fn is_decided(&self) -> bool {
        !matches!(self, SessionStatus::Pending)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A mentor's answer to a pending request.
///
/// There is no decision that leads back to PENDING.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub const fn target_status(&self) -> SessionStatus {
        match self {
            Decision::Accept => SessionStatus::Approved,
            Decision::Reject => SessionStatus::Rejected,
        }
    }
}

/// Review score, 1 to 5 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn new(value: i64) -> AppResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            // Range-checked above.
            Ok(Self(value as u8))
        } else {
            Err(AppError::bad_request("Invalid score. It must be between 1 and 5.")
                .with_action("Send an integer score from 1 to 5"))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Free-text review remark, at most 500 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Remark(String);

impl Remark {
    pub const MAX_LENGTH: usize = 500;

    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let remark = raw.into().trim().to_string();
        if remark.chars().count() > Self::MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Remark must be at most {} characters",
                Self::MAX_LENGTH
            )));
        }
        Ok(Self(remark))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(remark: impl Into<String>) -> Self {
        Self(remark.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Score and remark always travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub score: Score,
    pub remark: Remark,
}

/// Agenda a mentee sends with a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questions(String);

impl Questions {
    pub fn new(raw: impl Into<String>) -> AppResult<Self> {
        let questions = raw.into();
        if questions.trim().is_empty() {
            return Err(AppError::bad_request("Questions are required")
                .with_action("Describe what you would like to discuss"));
        }
        Ok(Self(questions))
    }

    pub fn from_db(questions: impl Into<String>) -> Self {
        Self(questions.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
