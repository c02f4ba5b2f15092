//! Server setup: configuration, initialization, shared state.
//!
//! - **`config`** - environment configuration and database loading
//! - **`init`** - application assembly
//! - **`state`** - shared handler state

pub mod config;
pub mod init;
pub mod state;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
