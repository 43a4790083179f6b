//! Application Layer
//!
//! Configuration and the session verifier service.

pub mod config;
pub mod verify_session;

// Re-exports
pub use config::AuthConfig;
pub use verify_session::SessionVerifier;
