//! VaultKeep domain service
//!
//! Pass-through over the vault-keep repository; every operation forwards
//! to persistence with no added logic, filtering, or validation.

use super::{entity::VaultKeep, repository::VaultKeepRepository};
use crate::domain::keeps::Keep;
use anyhow::Result;

pub struct VaultKeepService {
    repository: Box<dyn VaultKeepRepository>,
}

impl VaultKeepService {
    pub fn new(repository: Box<dyn VaultKeepRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, vault_keep: VaultKeep) -> Result<VaultKeep> {
        self.repository.create(&vault_keep).await
    }

    pub async fn get_keeps_by_vault_id(&self, vault_id: i64) -> Result<Vec<Keep>> {
        self.repository.get_keeps_by_vault_id(vault_id).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }
}
