use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Account role. Serialized (JSON, token claims, database) as the
/// upper-case code.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    #[display("USER")]
    User,
    #[display("MENTOR")]
    Mentor,
    #[display("ADMIN")]
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            User => "USER",
            Mentor => "MENTOR",
            Admin => "ADMIN",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "USER" => Some(User),
            "MENTOR" => Some(Mentor),
            "ADMIN" => Some(Admin),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_mentor(&self) -> bool {
        matches!(self, UserRole::Mentor)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}
