//! Admin Bootstrap
//!
//! Ensures the configured admin account exists at startup. An existing
//! account with that email is left untouched whatever its role.

use std::sync::Arc;

use crate::application::config::{AdminBootstrap, AuthConfig};
use crate::domain::entity::user::{NewUser, Profile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    user_id::UserId,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::AuthResult;

const ADMIN_FIRST_NAME: &str = "Default";
const ADMIN_LAST_NAME: &str = "Admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Created(UserId),
    AlreadyPresent(UserId),
}

pub struct BootstrapAdminUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> BootstrapAdminUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, admin: &AdminBootstrap) -> AuthResult<BootstrapOutcome> {
        let email = Email::new(admin.email.as_str())?;

        if let Some(existing) = self.repo.find_by_email(&email).await? {
            tracing::info!(user_id = %existing.user_id, "Admin user already exists");
            return Ok(BootstrapOutcome::AlreadyPresent(existing.user_id));
        }

        let raw_password = RawPassword::new(admin.password.clone())?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let new_user = NewUser::new(
            PersonName::from_db(ADMIN_FIRST_NAME),
            PersonName::from_db(ADMIN_LAST_NAME),
            email,
            password_hash,
            Profile::default(),
        )
        .with_role(UserRole::Admin);

        let user = self.repo.create(new_user).await?;
        tracing::info!(user_id = %user.user_id, "Default admin user created");

        Ok(BootstrapOutcome::Created(user.user_id))
    }
}
