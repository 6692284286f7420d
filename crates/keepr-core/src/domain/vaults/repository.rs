//! Vault repository trait

use super::entity::Vault;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VaultRepository: Send + Sync {
    /// List all vaults
    async fn get(&self) -> Result<Vec<Vault>>;

    /// Get a vault by its identifier
    async fn get_by_id(&self, id: i64) -> Result<Option<Vault>>;

    /// Store a new vault and assign its identifier
    async fn create(&self, vault: &Vault) -> Result<Vault>;

    /// Replace a stored vault
    async fn edit(&self, vault: &Vault) -> Result<()>;

    /// Remove a vault by its identifier
    async fn delete(&self, id: i64) -> Result<()>;
}
