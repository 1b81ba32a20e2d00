//! Entity Module

pub mod payload;
pub mod session;
pub mod user;
