//! Domain Layer
//!
//! Init data value objects and the pure verification services.

pub mod services;
pub mod value_object;

// Re-exports
pub use services::{Freshness, extract_identity, verify_init_data, verify_init_data_with};
pub use value_object::{init_data::InitData, verified_identity::VerifiedIdentity};
