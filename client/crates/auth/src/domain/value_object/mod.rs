//! Value Object Module

pub mod password;
pub mod session_token;
pub mod user_id;
pub mod user_role;
