//! Value Object Module

pub mod init_data;
pub mod verified_identity;
