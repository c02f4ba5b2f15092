//! Message document model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message document as stored and returned over the wire.
///
/// `id` is system-generated and immutable. `user` references the owner and
/// is always set from the session identity at creation. Only `name` is
/// mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique identifier.
    pub id: Uuid,
    /// Message text, non-empty.
    pub name: String,
    /// Owning user's identifier.
    pub user: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a message; the store fills in id and timestamps.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub name: String,
    pub user: Uuid,
}
