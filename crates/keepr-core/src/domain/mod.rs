//! Domain layer - Business logic and entities

pub mod keeps;
pub mod vault_keeps;
pub mod vaults;

// Re-export specific types to avoid naming conflicts
pub use keeps::{Keep, KeepError, KeepFilter, KeepRepository, KeepService, MatchMode};
pub use vault_keeps::{VaultKeep, VaultKeepRepository, VaultKeepService};
pub use vaults::{Vault, VaultRepository, VaultService};
