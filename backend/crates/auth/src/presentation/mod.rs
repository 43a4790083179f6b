//! Presentation Layer
//!
//! Request extractors.

pub mod extractor;

pub use extractor::SessionToken;
