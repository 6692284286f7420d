//! Keepr Core Library
//!
//! This is the shared core library containing the business rules of the
//! Keepr bookmarking application: keep filtering and search, privacy-gated
//! retrieval with view counting, and the repository contracts the
//! HTTP-facing interfaces are wired against.

pub mod domain;
pub mod infrastructure;

// Re-export common types and utilities for convenience
pub use domain::*;
pub use infrastructure::memory;
