//! In-memory repository implementations
//!
//! These implementations store records in memory only and stand in for
//! the persistence adapter in tests. They should NOT be used in
//! production.

pub mod keep_repository;
pub mod vault_keep_repository;
pub mod vault_repository;

pub use keep_repository::*;
pub use vault_keep_repository::*;
pub use vault_repository::*;
