//! Mentor directory queries

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

pub struct ListMentorsUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListMentorsUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Every MENTOR, in insertion order. May be empty.
    pub async fn execute(&self) -> AuthResult<Vec<User>> {
        self.repo.list_by_role(UserRole::Mentor).await
    }
}

pub struct GetMentorUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetMentorUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A user that exists but is not a mentor is reported as not found.
    pub async fn execute(&self, mentor_id: UserId) -> AuthResult<User> {
        self.repo
            .find_by_id(mentor_id)
            .await?
            .filter(User::is_mentor)
            .ok_or(AuthError::UserNotFound)
    }
}
