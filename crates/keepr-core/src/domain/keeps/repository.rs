//! Keep repository trait

use super::entity::{Keep, KeepError};
use async_trait::async_trait;

/// Repository for storing and retrieving keeps
///
/// Persistence owns the canonical records; callers receive transient
/// copies and write back via `create`/`edit`.
#[async_trait]
pub trait KeepRepository: Send + Sync {
    /// List all keeps
    async fn get(&self) -> Result<Vec<Keep>, KeepError>;

    /// List only keeps with the private flag set
    async fn get_private(&self) -> Result<Vec<Keep>, KeepError>;

    /// Get a keep by its identifier
    async fn get_by_id(&self, id: i64) -> Result<Option<Keep>, KeepError>;

    /// Store a new keep and assign its identifier
    async fn create(&self, keep: &Keep) -> Result<Keep, KeepError>;

    /// Replace a stored keep
    async fn edit(&self, keep: &Keep) -> Result<(), KeepError>;

    /// Remove a keep by its identifier
    async fn delete(&self, id: i64) -> Result<(), KeepError>;
}
