/**
 * Signup Handler
 *
 * This module implements the account creation handler for POST /auth/signup.
 * The password is hashed with bcrypt before it is stored, and a session
 * token is issued right away so the client is signed in after signup.
 */

use axum::{extract::State, Json};

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::sessions::create_token;
use crate::auth::users::NewUser;
use crate::error::ApiError;
use crate::middleware::LenientJson;
use crate::store::{SharedStore, StoreError};

/// Sign-up handler.
///
/// Creates the account and immediately answers with a session token, so the
/// new user does not have to sign in separately.
///
/// # Errors
///
/// * 400 `Please enter all fields` - any field missing/empty
/// * 400 `User already exists` - username taken
/// * 500 `Server error` - store, hashing or token-signing failure
pub async fn signup(
    State(store): State<SharedStore>,
    LenientJson(request): LenientJson<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let username = request
        .username
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::Validation("Please enter all fields"))?;
    let email = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::Validation("Please enter all fields"))?;
    let password = request
        .password
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::Validation("Please enter all fields"))?;

    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {e}");
        ApiError::Internal
    })?;

    let user = store
        .create_user(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::Duplicate(_) => ApiError::Validation("User already exists"),
            StoreError::Database(e) => {
                tracing::error!("failed to create user {username}: {e}");
                ApiError::Internal
            }
        })?;

    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("failed to sign session token: {e}");
        ApiError::Internal
    })?;

    tracing::info!("user signed up: {}", user.username);
    Ok(Json(AuthResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use std::sync::Arc;

    fn request(username: &str) -> SignupRequest {
        SignupRequest {
            username: Some(username.to_string()),
            email: Some(format!("{username}@example.com")),
            password: Some("password123".to_string()),
        }
    }

    #[tokio::test]
    async fn test_signup_success() {
        let store: SharedStore = Arc::new(MemStore::new());
        let response = signup(State(store), LenientJson(request("testuser")))
            .await
            .unwrap();
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_signup_missing_fields() {
        let store: SharedStore = Arc::new(MemStore::new());
        let incomplete = SignupRequest {
            username: Some("testuser".to_string()),
            email: None,
            password: Some("password123".to_string()),
        };

        let error = signup(State(store), LenientJson(incomplete)).await.unwrap_err();
        assert!(matches!(error, ApiError::Validation("Please enter all fields")));
    }

    #[tokio::test]
    async fn test_signup_duplicate_username() {
        let store: SharedStore = Arc::new(MemStore::new());
        signup(State(store.clone()), LenientJson(request("testuser")))
            .await
            .unwrap();

        let error = signup(State(store), LenientJson(request("testuser")))
            .await
            .unwrap_err();
        assert!(matches!(error, ApiError::Validation("User already exists")));
    }
}
