//! In-memory keep repository

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::keeps::{Keep, KeepError, KeepRepository};

/// In-memory implementation of [`KeepRepository`]
///
/// Keeps records in insertion order and assigns identifiers the way a
/// persistence adapter would.
#[derive(Debug, Default)]
pub struct InMemoryKeepRepository {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    keeps: Vec<Keep>,
    next_id: i64,
}

impl InMemoryKeepRepository {
    /// Create a new empty in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeepRepository for InMemoryKeepRepository {
    async fn get(&self) -> Result<Vec<Keep>, KeepError> {
        Ok(self.inner.lock().unwrap().keeps.clone())
    }

    async fn get_private(&self) -> Result<Vec<Keep>, KeepError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .keeps
            .iter()
            .filter(|keep| keep.is_private)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Keep>, KeepError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .keeps
            .iter()
            .find(|keep| keep.id == id)
            .cloned())
    }

    async fn create(&self, keep: &Keep) -> Result<Keep, KeepError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let mut created = keep.clone();
        created.id = inner.next_id;
        inner.keeps.push(created.clone());
        Ok(created)
    }

    async fn edit(&self, keep: &Keep) -> Result<(), KeepError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.keeps.iter_mut().find(|stored| stored.id == keep.id) {
            Some(stored) => {
                *stored = keep.clone();
                Ok(())
            }
            None => Err(KeepError::NotFound(keep.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), KeepError> {
        self.inner.lock().unwrap().keeps.retain(|keep| keep.id != id);
        Ok(())
    }
}
