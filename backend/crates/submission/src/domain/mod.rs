//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Submission)
//! - Domain value objects (ApplicantFields, Program, DocumentUpload)
//! - Domain services (storage key naming)
//! - Repository traits (record store and blob store interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
