//! Infrastructure Layer
//!
//! Session repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemorySessionRepository;
pub use postgres::PgSessionRepository;
