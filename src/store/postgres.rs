//! Postgres-backed store implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::auth::users::{NewUser, User};
use crate::messages::model::{Message, NewMessage};
use crate::movies::model::{Movie, NewMovie};
use crate::store::{MessageStore, MovieStore, StoreError, UserStore};

/// Store backed by a `sqlx` Postgres connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn message_from_row(row: &sqlx::postgres::PgRow) -> Message {
    Message {
        id: row.get("id"),
        name: row.get("name"),
        user: row.get("user_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn movie_from_row(row: &sqlx::postgres::PgRow) -> Movie {
    Movie {
        id: row.get("id"),
        title: row.get("title"),
        category: row.get("category"),
        user: row.get("user_id"),
        created_at: row.get("created_at"),
    }
}

fn user_from_row(row: &sqlx::postgres::PgRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                StoreError::Duplicate("username")
            } else {
                StoreError::Database(e)
            }
        })?;

        Ok(user_from_row(&row))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| user_from_row(&r)))
    }
}

#[async_trait]
impl MessageStore for PgStore {
    async fn insert_message(&self, message: NewMessage) -> Result<Message, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO messages (id, name, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&message.name)
        .bind(message.user)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(message_from_row(&row))
    }

    // Single UPDATE .. RETURNING, so the find-and-update is atomic at the
    // store and concurrent edits cannot interleave on this field.
    async fn update_message_name(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<Option<Message>, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE messages
            SET name = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| message_from_row(&r)))
    }

    async fn messages_for_user(&self, user: Uuid) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM messages
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(message_from_row).collect())
    }
}

#[async_trait]
impl MovieStore for PgStore {
    async fn insert_movie(&self, movie: NewMovie) -> Result<Movie, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row = sqlx::query(
            r#"
            INSERT INTO movies (id, title, category, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, category, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(&movie.title)
        .bind(&movie.category)
        .bind(movie.user)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(movie_from_row(&row))
    }

    async fn list_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, category, user_id, created_at
            FROM movies
            ORDER BY category, created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(movie_from_row).collect())
    }
}
