//! Sign In Use Case
//!
//! Authenticates email + password and issues a bearer token.

use std::sync::{Arc, LazyLock};

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Verified against when the email is unknown, so both failure paths do the
/// same Argon2 work.
static DUMMY_HASH: LazyLock<Option<UserPassword>> = LazyLock::new(|| {
    let raw = RawPassword::new("dummy-password-for-timing".to_string()).ok()?;
    UserPassword::from_raw(&raw, None).ok()
});

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub token: String,
    pub user: User,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let user = self.authenticate(input).await?;
        let token = self
            .tokens
            .issue(user.user_id, &user.email, user.user_role)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput { token, user })
    }

    /// Resolve the user for a credential pair.
    ///
    /// Every failure, malformed input included, is `InvalidCredentials`.
    pub async fn authenticate(&self, input: SignInInput) -> AuthResult<User> {
        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let user = match Email::new(input.email) {
            Ok(email) => self.repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            if let Some(dummy) = DUMMY_HASH.as_ref() {
                let _ = dummy.verify(&raw_password, self.config.pepper());
            }
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }
}
