/**
 * Router Configuration
 *
 * This module provides the main router creation function that binds every
 * endpoint to its handler and wraps the whole router in the cross-cutting
 * middleware, outermost first: panic catching, request tracing, CORS,
 * security response headers.
 */

use std::any::Any;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::auth::{login, signup};
use crate::messages::{add_message, edit_message, list_messages};
use crate::movies::{add_movie, list_movies};
use crate::server::state::AppState;

/// Create the router with all routes and middleware configured.
///
/// # Routes
///
/// * `POST /auth/login` - sign in, returns a session token
/// * `POST /auth/signup` - create an account, returns a session token
/// * `GET /messages` - list the session user's messages
/// * `POST /messages/add/message` - add a message
/// * `PUT /messages/edit/{messageId}` - edit a message's name
/// * `GET /movies` - list movies grouped by category
/// * `POST /movies` - add a movie
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/messages", get(list_messages))
        .route("/messages/add/message", post(add_message))
        .route("/messages/edit/{messageId}", put(edit_message))
        .route("/movies", get(list_movies).post(add_movie))
        .fallback(not_found)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            header::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            header::HeaderValue::from_static("DENY"),
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Fallback for unknown paths.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}

/// Turn a handler panic into the generic 500 response.
///
/// The process keeps serving; the panic is logged with whatever payload it
/// carried.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Server error" })),
    )
        .into_response()
}
