//! Submission Backend Module
//!
//! One application package (applicant fields plus an archive) per
//! platform identity, revisable by its owner.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, storage key naming, store traits
//! - `application/` - Lookup, create, and update use cases
//! - `infra/` - PostgreSQL record store and blob store adapters
//! - `presentation/` - HTTP handlers and router
//!
//! ## Consistency Model
//! - Every identity-bound operation verifies the session first
//! - Create checks for an existing row, but the `UNIQUE` constraint on
//!   `identity_key` is authoritative; a violation becomes `DuplicateSubmission`
//! - Blobs are uploaded before the row is written and are never rolled back

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SubmissionConfig;
pub use error::{SubmissionError, SubmissionResult};
pub use infra::{
    ConfiguredBlobStore, FsBlobStore, HttpBlobConfig, HttpBlobStore, PgSubmissionRepository,
};
pub use presentation::router::{submission_router, submission_router_generic};
