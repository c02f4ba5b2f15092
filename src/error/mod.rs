//! Error handling for the HTTP API.
//!
//! - **`types`** - the [`ApiError`] taxonomy and status-code mapping
//! - **`conversion`** - `IntoResponse` so handlers can return errors directly

pub mod conversion;
pub mod types;

pub use types::ApiError;
