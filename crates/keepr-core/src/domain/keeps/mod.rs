//! Keep domain module
//!
//! Contains the keep entity, filter value objects, and repository
//! traits related to saved items.

pub mod entity;
pub mod repository;
pub mod service;
pub mod value_object;

// Re-export keep types
pub use entity::*;
pub use repository::*;
pub use service::*;
pub use value_object::*;
