//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, hex, constant-time comparison)
//! - Client request helpers (session token extraction)

pub mod client;
pub mod crypto;
