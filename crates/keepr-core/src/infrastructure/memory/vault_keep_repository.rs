//! In-memory vault-keep repository

use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::keeps::{Keep, KeepRepository};
use crate::domain::vault_keeps::{VaultKeep, VaultKeepRepository};

/// In-memory implementation of [`VaultKeepRepository`]
///
/// Holds the association records itself and resolves keeps through the
/// shared keep repository, the way a persistence adapter joins the two
/// tables.
pub struct InMemoryVaultKeepRepository {
    keeps: Arc<dyn KeepRepository>,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    vault_keeps: Vec<VaultKeep>,
    next_id: i64,
}

impl InMemoryVaultKeepRepository {
    /// Create a repository resolving keeps through `keeps`
    pub fn new(keeps: Arc<dyn KeepRepository>) -> Self {
        Self {
            keeps,
            inner: Mutex::new(Inner::default()),
        }
    }
}

#[async_trait]
impl VaultKeepRepository for InMemoryVaultKeepRepository {
    async fn create(&self, vault_keep: &VaultKeep) -> Result<VaultKeep> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let mut created = vault_keep.clone();
        created.id = inner.next_id;
        inner.vault_keeps.push(created.clone());
        Ok(created)
    }

    async fn get_keeps_by_vault_id(&self, vault_id: i64) -> Result<Vec<Keep>> {
        let keep_ids: Vec<i64> = self
            .inner
            .lock()
            .unwrap()
            .vault_keeps
            .iter()
            .filter(|vk| vk.vault_id == vault_id)
            .map(|vk| vk.keep_id)
            .collect();

        let mut keeps = Vec::with_capacity(keep_ids.len());
        for keep_id in keep_ids {
            if let Some(keep) = self.keeps.get_by_id(keep_id).await? {
                keeps.push(keep);
            }
        }
        Ok(keeps)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.inner.lock().unwrap().vault_keeps.retain(|vk| vk.id != id);
        Ok(())
    }
}
