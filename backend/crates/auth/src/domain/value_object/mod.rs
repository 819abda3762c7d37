//! Value Object Module

pub mod browser_session;
pub mod role_id;
pub mod role_name;
pub mod session_token;
pub mod user_id;
pub mod user_name;
pub mod user_password;
