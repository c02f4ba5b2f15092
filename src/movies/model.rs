//! Movie document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Unique identifier.
    pub id: Uuid,
    /// Movie title, non-empty.
    pub title: String,
    /// Category used for grouping in listings.
    pub category: String,
    /// Submitting user's identifier.
    pub user: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a movie; the store fills in id and timestamp.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub category: String,
    pub user: Uuid,
}
