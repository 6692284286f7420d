//! In-memory vault repository

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::vaults::{Vault, VaultRepository};

/// In-memory implementation of [`VaultRepository`]
#[derive(Debug, Default)]
pub struct InMemoryVaultRepository {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    vaults: Vec<Vault>,
    next_id: i64,
}

impl InMemoryVaultRepository {
    /// Create a new empty in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VaultRepository for InMemoryVaultRepository {
    async fn get(&self) -> Result<Vec<Vault>> {
        Ok(self.inner.lock().unwrap().vaults.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Vault>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .vaults
            .iter()
            .find(|vault| vault.id == id)
            .cloned())
    }

    async fn create(&self, vault: &Vault) -> Result<Vault> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let mut created = vault.clone();
        created.id = inner.next_id;
        inner.vaults.push(created.clone());
        Ok(created)
    }

    async fn edit(&self, vault: &Vault) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        match inner.vaults.iter_mut().find(|stored| stored.id == vault.id) {
            Some(stored) => {
                *stored = vault.clone();
                Ok(())
            }
            None => Err(anyhow::anyhow!("vault {} not found", vault.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.inner.lock().unwrap().vaults.retain(|vault| vault.id != id);
        Ok(())
    }
}
