//! HTTP handlers for the auth endpoints.
//!
//! - **`types`** - request/response types
//! - **`login`** - sign-in handler
//! - **`signup`** - sign-up handler

pub mod login;
pub mod signup;
pub mod types;

pub use login::login;
pub use signup::signup;
