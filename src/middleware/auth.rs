/**
 * Authentication Middleware
 *
 * This module provides request identity extraction. Instead of an ambient
 * session object, handlers receive an explicit `CurrentUser` extractor.
 * It is deliberately infallible: absence of an identity is `None`, and each
 * handler decides what that means for its endpoint (add-message answers
 * with its legacy 500, movie listing does not care).
 */

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::auth::sessions::verify_token;

/// Identity recovered from a valid session token.
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// Optional request identity.
///
/// `None` when the request carries no `Authorization` header, a malformed
/// one, or a token that fails verification.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<SessionUser>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(identity_from_headers(&parts.headers)))
    }
}

fn identity_from_headers(headers: &HeaderMap) -> Option<SessionUser> {
    let auth_header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = auth_header.strip_prefix("Bearer ")?;

    let claims = match verify_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!("rejecting invalid session token: {e}");
            return None;
        }
    };

    let user_id = Uuid::parse_str(&claims.sub).ok()?;
    Some(SessionUser {
        user_id,
        email: Some(claims.email),
    })
}
