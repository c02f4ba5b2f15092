//! Shared test utilities: in-process test servers and store fakes.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use uuid::Uuid;

use reelbox::auth::sessions::create_token;
use reelbox::auth::users::{NewUser, User};
use reelbox::messages::model::{Message, NewMessage};
use reelbox::movies::model::{Movie, NewMovie};
use reelbox::routes::create_router;
use reelbox::server::AppState;
use reelbox::store::{
    MemStore, MessageStore, MovieStore, SharedStore, StoreError, UserStore,
};

/// Test server backed by a fresh in-memory store.
pub fn test_server() -> TestServer {
    server_with_store(Arc::new(MemStore::new()))
}

/// Test server backed by the given store.
pub fn server_with_store(store: SharedStore) -> TestServer {
    TestServer::new(create_router(AppState::new(store))).unwrap()
}

/// A session token for an arbitrary fresh user id.
pub fn session_token() -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    let token = create_token(user_id, "test@example.com".to_string()).unwrap();
    (user_id, token)
}

/// Store whose every operation fails, for exercising the persistence-error
/// paths end to end.
pub struct FailingStore;

fn rejected() -> StoreError {
    StoreError::Database(sqlx::Error::PoolClosed)
}

#[async_trait]
impl UserStore for FailingStore {
    async fn create_user(&self, _user: NewUser) -> Result<User, StoreError> {
        Err(rejected())
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
        Err(rejected())
    }
}

#[async_trait]
impl MessageStore for FailingStore {
    async fn insert_message(&self, _message: NewMessage) -> Result<Message, StoreError> {
        Err(rejected())
    }

    async fn update_message_name(
        &self,
        _id: Uuid,
        _name: &str,
    ) -> Result<Option<Message>, StoreError> {
        Err(rejected())
    }

    async fn messages_for_user(&self, _user: Uuid) -> Result<Vec<Message>, StoreError> {
        Err(rejected())
    }
}

#[async_trait]
impl MovieStore for FailingStore {
    async fn insert_movie(&self, _movie: NewMovie) -> Result<Movie, StoreError> {
        Err(rejected())
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        Err(rejected())
    }
}
