//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its assigned id.
    ///
    /// Fails with `AuthError::EmailTaken` when the email already exists.
    async fn create(&self, new_user: NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// All users holding `role`, in insertion order
    async fn list_by_role(&self, role: UserRole) -> AuthResult<Vec<User>>;

    /// Persist a role change
    async fn update_role(&self, user_id: UserId, role: UserRole) -> AuthResult<()>;
}
