//! Presentation Layer - HTTP API

pub mod dto;
pub mod form;
pub mod handlers;
pub mod router;

pub use router::{submission_router, submission_router_generic};
