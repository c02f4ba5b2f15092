//! Document store abstraction.
//!
//! Handlers depend on these traits rather than on a concrete database, so
//! tests can swap in the in-memory implementation and production wiring can
//! choose Postgres. Single-document operations are atomic at the store:
//! [`MessageStore::update_message_name`] is one find-and-update, never a
//! read-modify-write in the handler.
//!
//! - **`postgres`** - `sqlx`-backed implementation
//! - **`memory`** - mutex-guarded maps for tests and databaseless operation

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::users::{NewUser, User};
use crate::messages::model::{Message, NewMessage};
use crate::movies::model::{Movie, NewMovie};

pub use memory::MemStore;
pub use postgres::PgStore;

/// Errors raised by store implementations.
///
/// Handlers translate these into fixed [`crate::error::ApiError`] messages;
/// driver detail stays in the logs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A uniqueness constraint was violated.
    #[error("duplicate {0}")]
    Duplicate(&'static str),
}

/// User account persistence.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create an account. Fails with [`StoreError::Duplicate`] if the
    /// username is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Look up an account by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

/// Message document persistence.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Persist a new message, generating its id and timestamps.
    async fn insert_message(&self, message: NewMessage) -> Result<Message, StoreError>;

    /// Atomically set `name` on the message with the given id and return the
    /// post-update document, or `None` if no document matched.
    async fn update_message_name(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<Option<Message>, StoreError>;

    /// All messages owned by `user`, newest first.
    async fn messages_for_user(&self, user: Uuid) -> Result<Vec<Message>, StoreError>;
}

/// Movie document persistence.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persist a new movie, generating its id and timestamp.
    async fn insert_movie(&self, movie: NewMovie) -> Result<Movie, StoreError>;

    /// All movies, ordered by category then creation time.
    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError>;
}

/// Everything the handlers need from persistence, behind one object.
pub trait Store: UserStore + MessageStore + MovieStore {}

impl<T: UserStore + MessageStore + MovieStore> Store for T {}

/// Shared handle to the process-wide store.
pub type SharedStore = Arc<dyn Store>;
