//! Application Layer
//!
//! Use cases and application services.

pub mod bootstrap_admin;
pub mod config;
pub mod mentors;
pub mod promote;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use bootstrap_admin::{BootstrapAdminUseCase, BootstrapOutcome};
pub use config::{AdminBootstrap, AuthConfig};
pub use mentors::{GetMentorUseCase, ListMentorsUseCase};
pub use promote::PromoteToMentorUseCase;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::{AccessClaims, TokenService};
