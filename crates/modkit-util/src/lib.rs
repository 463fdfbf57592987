//! Shared utilities for the modkit mod manager.
//!
//! This crate provides cross-cutting concerns used by all other modkit
//! crates: error types, filesystem helpers, cryptographic hashing, and
//! terminal progress indicators.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
