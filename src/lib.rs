//! Reelbox - movie and message board backend.
//!
//! A small HTTP backend exposing authentication and message/movie endpoints
//! over a document store. The store is behind injectable traits so the same
//! handlers run against Postgres in production and an in-memory store in
//! tests.
//!
//! # Module Structure
//!
//! - **`server`** - configuration, initialization, shared state
//! - **`routes`** - router assembly and middleware layering
//! - **`auth`** - accounts, session tokens, sign-in/sign-up handlers
//! - **`messages`** - message model and handlers
//! - **`movies`** - movie model and handlers
//! - **`store`** - store traits plus Postgres and in-memory implementations
//! - **`middleware`** - per-request identity extraction
//! - **`error`** - error taxonomy and HTTP response conversion
//!
//! # Request Flow
//!
//! Inbound request -> middleware stack (panic catching, tracing, CORS,
//! security headers) -> router dispatch -> handler (validate, resolve
//! identity, one store operation) -> JSON response.

pub mod auth;
pub mod error;
pub mod messages;
pub mod middleware;
pub mod movies;
pub mod routes;
pub mod server;
pub mod store;

pub use error::ApiError;
pub use server::{create_app, AppState, ServerConfig};
