//! Auth (Authentication) Backend Module
//!
//! Verifies Telegram Mini App `initData` tokens and extracts the
//! identity they carry.
//!
//! Clean Architecture structure:
//! - `domain/` - Init data parsing, signature verification, identity extraction
//! - `application/` - Configuration and the session verifier service
//! - `presentation/` - axum extractor for the raw token
//!
//! ## Security Model
//! - Tokens are signed by the platform with a key derived from the bot token
//! - Signatures are compared in constant time
//! - Every verification failure collapses to one opaque error

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::verify_session::SessionVerifier;
pub use domain::value_object::verified_identity::VerifiedIdentity;
pub use error::{AuthError, AuthResult};
pub use presentation::extractor::SessionToken;
