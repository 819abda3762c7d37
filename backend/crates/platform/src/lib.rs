//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Database connection settings read from the environment
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Secure random tokens
//! - Cookie and header helpers

pub mod config;
pub mod cookie;
pub mod crypto;
pub mod password;
