/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. Fields arriving from clients are `Option` so
 * that missing values reach the handler's own validation instead of being
 * rejected by the JSON extractor with a framework-shaped error.
 */

use serde::{Deserialize, Serialize};

/// Sign-up request.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Sign-in request.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful auth response: an opaque session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}
