//! Authenticated caller, as seen by the use cases

use auth::AccessClaims;
use auth::models::{user_id::UserId, user_role::UserRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    /// Role claim from the token, not a directory lookup
    pub role: UserRole,
}

impl Caller {
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }
}

impl From<&AccessClaims> for Caller {
    fn from(claims: &AccessClaims) -> Self {
        Self {
            user_id: claims.user_id(),
            role: claims.role,
        }
    }
}
