//! VaultKeep repository trait

use super::entity::VaultKeep;
use crate::domain::keeps::Keep;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VaultKeepRepository: Send + Sync {
    /// Store a new association and assign its identifier
    async fn create(&self, vault_keep: &VaultKeep) -> Result<VaultKeep>;

    /// List the keeps held by a vault
    async fn get_keeps_by_vault_id(&self, vault_id: i64) -> Result<Vec<Keep>>;

    /// Remove an association by its identifier
    async fn delete(&self, id: i64) -> Result<()>;
}
