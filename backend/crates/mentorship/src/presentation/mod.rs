//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::MentorshipAppState;
pub use router::{mentorship_router, mentorship_router_generic};
