//! VaultKeep domain module
//!
//! Contains the join record associating keeps with vaults.

pub mod entity;
pub mod repository;
pub mod service;

// Re-export vault-keep types
pub use entity::*;
pub use repository::*;
pub use service::*;
