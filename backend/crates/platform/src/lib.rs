//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id)
//! - Signed bearer tokens (JWT, HS256)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod password;
pub mod token;
