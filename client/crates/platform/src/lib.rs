//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the collaborators the client core talks to:
//! - HTTP request contract and a `reqwest` implementation
//! - Durable key-value storage (in-memory and file backed)
//! - UI feedback: loading overlay, notifications, presenter trait

pub mod feedback;
pub mod http;
pub mod storage;
pub mod sync;
