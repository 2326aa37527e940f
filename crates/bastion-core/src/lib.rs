//! Bastion-core: Shared types and errors
//!
//! This crate provides the foundational types used across the Bastion workspace.

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
