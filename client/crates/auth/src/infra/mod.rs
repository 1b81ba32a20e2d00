//! Infrastructure Layer
//!
//! Session persistence over the platform's key-value storage.

pub mod storage;

pub use storage::StoredSessionRepository;
