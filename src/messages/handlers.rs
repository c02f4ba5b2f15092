//! HTTP handlers for the message endpoints.
//!
//! The controller pattern throughout: validate input, resolve the session
//! identity, perform exactly one store operation, map the outcome to a
//! status code and the fixed JSON body for that endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::messages::model::{Message, NewMessage};
use crate::middleware::{CurrentUser, LenientJson};
use crate::store::SharedStore;

/// Body of `POST /messages/add/message`.
#[derive(Debug, Default, Deserialize)]
pub struct AddMessageRequest {
    pub message: Option<MessagePayload>,
}

/// The nested `message` object.
///
/// Clients may send a `user` field, but it is never read: the owner is
/// always the session identity.
#[derive(Debug, Deserialize)]
pub struct MessagePayload {
    pub name: Option<String>,
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// Body of `PUT /messages/edit/{messageId}`.
#[derive(Debug, Default, Deserialize)]
pub struct EditMessageRequest {
    pub name: Option<String>,
}

/// Add a message owned by the session user.
///
/// Input is validated before the identity check, matching the original
/// controller's order.
///
/// # Errors
///
/// * 400 `missing information` - `message` or `message.name` absent/empty
/// * 500 `You are not authenticated` - no session identity (legacy status)
/// * 500 `Failed to add message` - store rejected the insert
pub async fn add_message(
    State(store): State<SharedStore>,
    user: CurrentUser,
    LenientJson(request): LenientJson<AddMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let name = request
        .message
        .as_ref()
        .and_then(|m| m.name.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(ApiError::Validation("missing information"))?;

    let identity = user.0.ok_or(ApiError::Unauthenticated)?;

    let message = store
        .insert_message(NewMessage {
            name: name.to_string(),
            user: identity.user_id,
        })
        .await
        .map_err(|e| {
            tracing::error!("failed to add message for {}: {e}", identity.user_id);
            ApiError::Persistence("Failed to add message")
        })?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Edit a message's `name` by id.
///
/// The update is a single atomic find-and-update at the store; the handler
/// never reads then writes. There is no ownership check against the session
/// user - the original controller had none and its clients rely on the
/// current contract.
///
/// # Errors
///
/// * 400 `missing information` - `name` empty or `messageId` unparseable
/// * 404 `Message not found` - no document with that id
/// * 500 `Failed to edit message` - store rejected the update
pub async fn edit_message(
    State(store): State<SharedStore>,
    Path(message_id): Path<String>,
    LenientJson(request): LenientJson<EditMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(ApiError::Validation("missing information"))?;

    let message_id = Uuid::parse_str(message_id.trim())
        .map_err(|_| ApiError::Validation("missing information"))?;

    let updated = store
        .update_message_name(message_id, name)
        .await
        .map_err(|e| {
            tracing::error!("failed to edit message {message_id}: {e}");
            ApiError::Persistence("Failed to edit message")
        })?;

    match updated {
        Some(message) => Ok(Json(message)),
        None => Err(ApiError::NotFound("Message not found")),
    }
}

/// List the session user's messages, newest first.
///
/// # Errors
///
/// * 500 `You are not authenticated` - no session identity (legacy status)
/// * 500 `Failed to fetch messages` - store rejected the query
pub async fn list_messages(
    State(store): State<SharedStore>,
    user: CurrentUser,
) -> Result<Json<Vec<Message>>, ApiError> {
    let identity = user.0.ok_or(ApiError::Unauthenticated)?;

    let messages = store
        .messages_for_user(identity.user_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to fetch messages for {}: {e}", identity.user_id);
            ApiError::Persistence("Failed to fetch messages")
        })?;

    Ok(Json(messages))
}
