//! In-memory store implementation.
//!
//! Backs the test suites and keeps the server functional when no database
//! is configured. State is process-local and lost on restart.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::users::{NewUser, User};
use crate::messages::model::{Message, NewMessage};
use crate::movies::model::{Movie, NewMovie};
use crate::store::{MessageStore, MovieStore, StoreError, UserStore};

/// Store holding all documents in mutex-guarded maps.
#[derive(Default)]
pub struct MemStore {
    users: Mutex<HashMap<Uuid, User>>,
    messages: Mutex<HashMap<Uuid, Message>>,
    movies: Mutex<Vec<Movie>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.username == user.username) {
            return Err(StoreError::Duplicate("username"));
        }

        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl MessageStore for MemStore {
    async fn insert_message(&self, message: NewMessage) -> Result<Message, StoreError> {
        let now = Utc::now();
        let created = Message {
            id: Uuid::new_v4(),
            name: message.name,
            user: message.user,
            created_at: now,
            updated_at: now,
        };
        self.messages
            .lock()
            .unwrap()
            .insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_message_name(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<Option<Message>, StoreError> {
        let mut messages = self.messages.lock().unwrap();
        Ok(messages.get_mut(&id).map(|message| {
            message.name = name.to_string();
            message.updated_at = Utc::now();
            message.clone()
        }))
    }

    async fn messages_for_user(&self, user: Uuid) -> Result<Vec<Message>, StoreError> {
        let messages = self.messages.lock().unwrap();
        let mut owned: Vec<Message> = messages
            .values()
            .filter(|m| m.user == user)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

#[async_trait]
impl MovieStore for MemStore {
    async fn insert_movie(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let created = Movie {
            id: Uuid::new_v4(),
            title: movie.title,
            category: movie.category,
            user: movie.user,
            created_at: Utc::now(),
        };
        self.movies.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let mut movies = self.movies.lock().unwrap().clone();
        movies.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_username() {
        let store = MemStore::new();
        let user = NewUser {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
        };

        store.create_user(user.clone()).await.unwrap();
        let result = store.create_user(user).await;
        assert!(matches!(result, Err(StoreError::Duplicate("username"))));
    }

    #[tokio::test]
    async fn test_find_by_username() {
        let store = MemStore::new();
        let created = store
            .create_user(NewUser {
                username: "testuser".to_string(),
                email: "test@example.com".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();

        let found = store.find_by_username("testuser").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_message_name_returns_post_update_document() {
        let store = MemStore::new();
        let message = store
            .insert_message(NewMessage {
                name: "before".to_string(),
                user: Uuid::new_v4(),
            })
            .await
            .unwrap();

        let updated = store
            .update_message_name(message.id, "after")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, message.id);
        assert_eq!(updated.name, "after");
        assert_eq!(updated.user, message.user);
    }

    #[tokio::test]
    async fn test_update_message_name_missing_id_is_none() {
        let store = MemStore::new();
        let result = store
            .update_message_name(Uuid::new_v4(), "whatever")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_messages_for_user_filters_by_owner() {
        let store = MemStore::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        store
            .insert_message(NewMessage {
                name: "mine".to_string(),
                user: owner,
            })
            .await
            .unwrap();
        store
            .insert_message(NewMessage {
                name: "theirs".to_string(),
                user: other,
            })
            .await
            .unwrap();

        let owned = store.messages_for_user(owner).await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].name, "mine");
    }

    #[tokio::test]
    async fn test_list_movies_orders_by_category() {
        let store = MemStore::new();
        let user = Uuid::new_v4();
        for (title, category) in [("Alien", "scifi"), ("Heat", "crime"), ("Dune", "scifi")] {
            store
                .insert_movie(NewMovie {
                    title: title.to_string(),
                    category: category.to_string(),
                    user,
                })
                .await
                .unwrap();
        }

        let movies = store.list_movies().await.unwrap();
        let categories: Vec<&str> = movies.iter().map(|m| m.category.as_str()).collect();
        assert_eq!(categories, vec!["crime", "scifi", "scifi"]);
    }
}
