//! Message board: model and HTTP handlers.
//!
//! Messages are owned documents: the owner is always the session identity
//! at creation time and only the `name` field is mutable afterwards. There
//! is no delete operation.

pub mod handlers;
pub mod model;

pub use handlers::{add_message, edit_message, list_messages};
pub use model::{Message, NewMessage};
