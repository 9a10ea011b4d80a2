//! Application Configuration
//!
//! Knobs for the session lifecycle engine. Defaults reproduce the
//! established behavior of the service; the alternatives are opt-in.

use auth::models::user_role::UserRole;
use std::str::FromStr;

/// Which role claims list sessions as a mentee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenteeRolePolicy {
    /// Only a literal `MENTEE` role lists as mentee. No stored role carries
    /// it, so USER callers get `InvalidRole`.
    #[default]
    Literal,
    /// USER callers list the sessions they requested.
    UserIsMentee,
}

impl MenteeRolePolicy {
    pub const MENTEE_CODE: &'static str = "MENTEE";

    pub fn lists_as_mentee(&self, role: UserRole) -> bool {
        match self {
            MenteeRolePolicy::Literal => role.code() == Self::MENTEE_CODE,
            MenteeRolePolicy::UserIsMentee => role == UserRole::User,
        }
    }
}

impl FromStr for MenteeRolePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(MenteeRolePolicy::Literal),
            "user" => Ok(MenteeRolePolicy::UserIsMentee),
            other => Err(format!("unknown mentee role policy: {other} (expected literal|user)")),
        }
    }
}

/// Where accept/reject reads the caller's role from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleSource {
    /// The role claim in the bearer token
    #[default]
    TokenClaim,
    /// A fresh lookup in the user directory
    Directory,
}

impl FromStr for RoleSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(RoleSource::TokenClaim),
            "directory" => Ok(RoleSource::Directory),
            other => Err(format!("unknown role source: {other} (expected token|directory)")),
        }
    }
}

/// Mentorship application configuration
#[derive(Debug, Clone)]
pub struct MentorshipConfig {
    pub mentee_role_policy: MenteeRolePolicy,
    pub role_source: RoleSource,
    /// Whether a decided session may be accepted/rejected again
    pub allow_redecide: bool,
}

impl Default for MentorshipConfig {
    fn default() -> Self {
        Self {
            mentee_role_policy: MenteeRolePolicy::default(),
            role_source: RoleSource::default(),
            allow_redecide: true,
        }
    }
}

impl MentorshipConfig {
    /// USER callers can list their requests; everything else as default.
    pub fn development() -> Self {
        Self {
            mentee_role_policy: MenteeRolePolicy::UserIsMentee,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MentorshipConfig::default();
        assert_eq!(config.mentee_role_policy, MenteeRolePolicy::Literal);
        assert_eq!(config.role_source, RoleSource::TokenClaim);
        assert!(config.allow_redecide);
    }

    #[test]
    fn test_literal_policy_matches_no_stored_role() {
        let policy = MenteeRolePolicy::Literal;
        for role in [UserRole::User, UserRole::Mentor, UserRole::Admin] {
            assert!(!policy.lists_as_mentee(role));
        }
    }

    #[test]
    fn test_user_is_mentee_policy() {
        let policy = MenteeRolePolicy::UserIsMentee;
        assert!(policy.lists_as_mentee(UserRole::User));
        assert!(!policy.lists_as_mentee(UserRole::Admin));
    }

    #[test]
    fn test_parse() {
        assert_eq!("user".parse(), Ok(MenteeRolePolicy::UserIsMentee));
        assert_eq!(" Literal ".parse(), Ok(MenteeRolePolicy::Literal));
        assert!("mentee".parse::<MenteeRolePolicy>().is_err());
        assert_eq!("directory".parse(), Ok(RoleSource::Directory));
        assert_eq!("TOKEN".parse(), Ok(RoleSource::TokenClaim));
        assert!("db".parse::<RoleSource>().is_err());
    }
}
