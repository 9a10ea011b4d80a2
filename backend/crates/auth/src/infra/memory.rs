//! In-memory Repository Implementation
//!
//! Backs tests and database-less runs. Ids come from a counter starting at 1.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Users {
    last_id: i64,
    by_id: BTreeMap<UserId, User>,
}

/// Cheap to clone; clones share the same store.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Users>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> AuthResult<User> {
        let mut users = self.inner.write().await;

        // Checked under the write lock, so concurrent signups cannot both pass.
        if users.by_id.values().any(|u| u.email == new_user.email) {
            return Err(AuthError::EmailTaken);
        }

        users.last_id += 1;
        let user_id = UserId::from_i64(users.last_id);
        let user = User::from_new(user_id, new_user, Utc::now());
        users.by_id.insert(user_id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.inner.read().await.by_id.get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .await
            .by_id
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn list_by_role(&self, role: UserRole) -> AuthResult<Vec<User>> {
        Ok(self
            .inner
            .read()
            .await
            .by_id
            .values()
            .filter(|u| u.user_role == role)
            .cloned()
            .collect())
    }

    async fn update_role(&self, user_id: UserId, role: UserRole) -> AuthResult<()> {
        let mut users = self.inner.write().await;
        let user = users.by_id.get_mut(&user_id).ok_or(AuthError::UserNotFound)?;
        user.user_role = role;
        user.updated_at = Utc::now();
        Ok(())
    }
}
