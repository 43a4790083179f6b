//! Application Layer - Use Cases
//!
//! Orchestrates session verification, the record store, and the blob
//! store. Every identity-bound operation verifies the session before any
//! storage is touched.

pub mod config;
pub mod create_submission;
mod identity;
pub mod lookup;
pub mod update_submission;

pub use config::SubmissionConfig;
pub use create_submission::{CreateSubmissionInput, CreateSubmissionUseCase};
pub use lookup::{LookupOutput, LookupSubmissionUseCase, SubmissionView};
pub use update_submission::{UpdateSubmissionInput, UpdateSubmissionUseCase};
