//! Application Layer
//!
//! Use cases, the shared session context and the `SessionStore` facade.

mod authenticate;
pub mod config;
pub mod context;
pub mod guard;
pub mod restore_session;
pub mod session_store;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use config::AuthConfig;
pub use context::SessionContext;
pub use guard::{AccessDenial, GuardUseCase};
pub use restore_session::RestoreSessionUseCase;
pub use session_store::SessionStore;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use sign_up::SignUpUseCase;
