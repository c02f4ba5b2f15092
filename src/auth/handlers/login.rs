/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the account by username
 * 2. Verify the password using bcrypt
 * 3. Generate a session token
 * 4. Return the token
 *
 * All three credential failures (missing fields, unknown user, wrong
 * password) are 400s with distinct fixed messages; only unexpected
 * failures become 500 `Server error`.
 */

use axum::{extract::State, Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::middleware::LenientJson;
use crate::store::SharedStore;

/// Sign-in handler.
///
/// # Errors
///
/// * 400 `Please enter all fields` - username or password missing/empty
/// * 400 `User not found` - no account with that username
/// * 400 `Email or password do not match` - password verification failed
/// * 500 `Server error` - store, hashing or token-signing failure
pub async fn login(
    State(store): State<SharedStore>,
    LenientJson(request): LenientJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let username = request
        .username
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::Validation("Please enter all fields"))?;
    let password = request
        .password
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::Validation("Please enter all fields"))?;

    let user = store
        .find_by_username(username)
        .await
        .map_err(|e| {
            tracing::error!("login lookup failed for {username}: {e}");
            ApiError::Internal
        })?
        .ok_or(ApiError::UserNotFound)?;

    let valid = verify(password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification failed: {e}");
        ApiError::Internal
    })?;
    if !valid {
        return Err(ApiError::CredentialMismatch);
    }

    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("failed to sign session token: {e}");
        ApiError::Internal
    })?;

    tracing::info!("user signed in: {}", user.username);
    Ok(Json(AuthResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::NewUser;
    use crate::store::{MemStore, UserStore};
    use std::sync::Arc;

    async fn store_with_user(username: &str, password: &str) -> SharedStore {
        let store = MemStore::new();
        store
            .create_user(NewUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash: bcrypt::hash(password, bcrypt::DEFAULT_COST).unwrap(),
            })
            .await
            .unwrap();
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_login_success() {
        let store = store_with_user("testuser", "password123").await;
        let request = LoginRequest {
            username: Some("testuser".to_string()),
            password: Some("password123".to_string()),
        };

        let response = login(State(store), LenientJson(request)).await.unwrap();
        assert!(!response.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let store: SharedStore = Arc::new(MemStore::new());
        let request = LoginRequest {
            username: Some("testuser".to_string()),
            password: None,
        };

        let error = login(State(store), LenientJson(request)).await.unwrap_err();
        assert!(matches!(error, ApiError::Validation("Please enter all fields")));
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let store: SharedStore = Arc::new(MemStore::new());
        let request = LoginRequest {
            username: Some("nobody".to_string()),
            password: Some("password123".to_string()),
        };

        let error = login(State(store), LenientJson(request)).await.unwrap_err();
        assert!(matches!(error, ApiError::UserNotFound));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let store = store_with_user("testuser", "password123").await;
        let request = LoginRequest {
            username: Some("testuser".to_string()),
            password: Some("wrongpassword".to_string()),
        };

        let error = login(State(store), LenientJson(request)).await.unwrap_err();
        assert!(matches!(error, ApiError::CredentialMismatch));
    }
}
