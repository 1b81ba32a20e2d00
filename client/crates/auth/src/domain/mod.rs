//! Domain Layer
//!
//! Contains entities, value objects, and the session repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{session::AuthState, session::Session, user::User};
pub use repository::SessionRepository;
