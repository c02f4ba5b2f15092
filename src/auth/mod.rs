//! Authentication: accounts, session tokens, and the auth endpoints.
//!
//! # Flow
//!
//! 1. **Sign-up**: account created, password hashed with bcrypt, token
//!    returned.
//! 2. **Sign-in**: credentials verified, token returned.
//! 3. Subsequent requests present the token; handlers recover the identity
//!    through [`crate::middleware::CurrentUser`].
//!
//! - **`users`** - account model
//! - **`sessions`** - token creation and verification
//! - **`handlers`** - HTTP handlers

pub mod handlers;
pub mod sessions;
pub mod users;

pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest};
pub use handlers::{login, signup};
