//! Keep entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during keep operations
#[derive(Debug, Error)]
pub enum KeepError {
    /// No keep exists with the requested id
    #[error("Invalid Id")]
    NotFound(i64),

    /// The keep exists but is not individually retrievable
    #[error("This Keep Is Private")]
    Forbidden(i64),

    /// Persistence backend failure surfaced by a repository implementation
    #[error("Repository error: {0}")]
    Repository(String),
}

/// Keep entity representing one saved item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keep {
    /// Unique identifier, assigned by persistence on creation
    pub id: i64,
    /// Display name, included in filter matching
    pub name: String,
    /// Free text, included in filter matching
    pub description: String,
    /// Optional image URL
    pub img: Option<String>,
    /// Whether the keep is hidden from single-item retrieval
    pub is_private: bool,
    /// Number of successful single-item retrievals
    pub views: u64,
    /// Keep creation timestamp
    pub created_at: DateTime<Utc>,
    /// Keep last modified timestamp
    pub updated_at: DateTime<Utc>,
}

impl Keep {
    /// Create a new keep; the id stays zero until persistence assigns one
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            description,
            img: None,
            is_private: false,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Count one successful single-item retrieval
    pub fn record_view(&mut self) {
        self.views += 1;
    }

    /// Update keep content
    pub fn update_content(&mut self, name: Option<String>, description: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        self.updated_at = Utc::now();
    }
}
