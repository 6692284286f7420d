//! Vault entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vault entity representing a named collection of keeps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vault {
    /// Unique identifier, assigned by persistence on creation
    pub id: i64,
    /// Human-readable vault name
    pub name: String,
    /// Vault description
    pub description: String,
    /// Whether the vault is hidden from listings
    pub is_private: bool,
    /// Vault creation timestamp
    pub created_at: DateTime<Utc>,
    /// Vault last modified timestamp
    pub updated_at: DateTime<Utc>,
}

impl Vault {
    /// Create a new vault; the id stays zero until persistence assigns one
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            description,
            is_private: false,
            created_at: now,
            updated_at: now,
        }
    }
}
