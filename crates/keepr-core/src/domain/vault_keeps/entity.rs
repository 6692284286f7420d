//! VaultKeep entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Join record associating a keep with a vault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultKeep {
    /// Unique identifier, assigned by persistence on creation
    pub id: i64,
    /// The vault holding the keep
    pub vault_id: i64,
    /// The keep placed in the vault
    pub keep_id: i64,
    /// Association timestamp
    pub created_at: DateTime<Utc>,
}

impl VaultKeep {
    /// Create a new association; the id stays zero until persistence
    /// assigns one
    pub fn new(vault_id: i64, keep_id: i64) -> Self {
        Self {
            id: 0,
            vault_id,
            keep_id,
            created_at: Utc::now(),
        }
    }
}
