//! Promote To Mentor Use Case
//!
//! Elevates a USER or ADMIN to MENTOR. Callers must pass the admin guard
//! (`presentation::middleware::require_admin`) before reaching this.

use std::sync::Arc;

use kernel::lock::KeyedLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

pub struct PromoteToMentorUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    locks: Arc<KeyedLock<UserId>>,
}

impl<R> PromoteToMentorUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, locks: Arc<KeyedLock<UserId>>) -> Self {
        Self { repo, locks }
    }

    pub async fn execute(&self, target: UserId) -> AuthResult<User> {
        let _guard = self.locks.lock(target).await;

        let mut user = self
            .repo
            .find_by_id(target)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.promote_to_mentor()?;
        self.repo.update_role(user.user_id, user.user_role).await?;

        tracing::info!(user_id = %user.user_id, "User promoted to mentor");

        Ok(user)
    }
}
