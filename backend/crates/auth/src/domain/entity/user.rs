//! User Entity
//!
//! A registered account: identity, credential, optional profile, and role.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, person_name::PersonName, user_id::UserId, user_password::UserPassword,
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Optional free-text profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub address: Option<String>,
    pub bio: Option<String>,
    pub occupation: Option<String>,
    pub expertise: Option<String>,
}

impl Profile {
    /// Blank strings are stored as absent.
    pub fn new(
        address: Option<String>,
        bio: Option<String>,
        occupation: Option<String>,
        expertise: Option<String>,
    ) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            address: clean(address),
            bio: clean(bio),
            occupation: clean(occupation),
            expertise: clean(expertise),
        }
    }
}

/// A user that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub password_hash: UserPassword,
    pub profile: Profile,
    pub user_role: UserRole,
}

impl NewUser {
    /// New accounts start as `USER`.
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: Email,
        password_hash: UserPassword,
        profile: Profile,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            password_hash,
            profile,
            user_role: UserRole::default(),
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.user_role = role;
        self
    }
}

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Unique, compared exactly
    pub email: Email,
    pub password_hash: UserPassword,
    pub profile: Profile,
    pub user_role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a stored user from its insert form
    pub fn from_new(user_id: UserId, new_user: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            profile: new_user.profile,
            user_role: new_user.user_role,
            created_at: now,
            updated_at: now,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_mentor(&self) -> bool {
        self.user_role.is_mentor()
    }

    /// USER or ADMIN becomes MENTOR. Fails only when already MENTOR.
    pub fn promote_to_mentor(&mut self) -> AuthResult<()> {
        if self.is_mentor() {
            return Err(AuthError::AlreadyMentor);
        }
        self.user_role = UserRole::Mentor;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn sample_user(role: UserRole) -> User {
        let raw = RawPassword::new("secret".to_string()).unwrap();
        let new_user = NewUser::new(
            PersonName::new("Ada", "First name").unwrap(),
            PersonName::new("Lovelace", "Last name").unwrap(),
            Email::new("ada@example.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            Profile::default(),
        )
        .with_role(role);
        User::from_new(UserId::from_i64(1), new_user, Utc::now())
    }

    #[test]
    fn test_new_user_defaults_to_user_role() {
        let user = sample_user(UserRole::default());
        assert_eq!(user.user_role, UserRole::User);
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_promote_user_and_admin() {
        let mut user = sample_user(UserRole::User);
        user.promote_to_mentor().unwrap();
        assert_eq!(user.user_role, UserRole::Mentor);

        let mut admin = sample_user(UserRole::Admin);
        admin.promote_to_mentor().unwrap();
        assert_eq!(admin.user_role, UserRole::Mentor);
    }

    #[test]
    fn test_promote_mentor_fails() {
        let mut mentor = sample_user(UserRole::Mentor);
        assert!(matches!(
            mentor.promote_to_mentor(),
            Err(AuthError::AlreadyMentor)
        ));
    }

    #[test]
    fn test_profile_blank_fields_dropped() {
        let profile = Profile::new(Some("  ".into()), Some("Rustacean".into()), None, Some("".into()));
        assert_eq!(profile.address, None);
        assert_eq!(profile.bio.as_deref(), Some("Rustacean"));
        assert_eq!(profile.expertise, None);
    }
}
