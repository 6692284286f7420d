//! Vault domain service
//!
//! Pass-through over the vault repository; every operation forwards to
//! persistence with no added logic, filtering, or validation.

use super::{entity::Vault, repository::VaultRepository};
use anyhow::Result;

pub struct VaultService {
    repository: Box<dyn VaultRepository>,
}

impl VaultService {
    pub fn new(repository: Box<dyn VaultRepository>) -> Self {
        Self { repository }
    }

    pub async fn get(&self) -> Result<Vec<Vault>> {
        self.repository.get().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Vault>> {
        self.repository.get_by_id(id).await
    }

    pub async fn create(&self, vault: Vault) -> Result<Vault> {
        self.repository.create(&vault).await
    }

    pub async fn edit(&self, vault: Vault) -> Result<()> {
        self.repository.edit(&vault).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }
}
