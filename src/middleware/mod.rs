//! Request-processing middleware.
//!
//! - **`auth`** - per-request identity extraction from session tokens
//! - **`json`** - lenient JSON body extraction

pub mod auth;
pub mod json;

pub use auth::{CurrentUser, SessionUser};
pub use json::LenientJson;
