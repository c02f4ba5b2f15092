//! Movie catalog: model and HTTP handlers.

pub mod handlers;
pub mod model;

pub use handlers::{add_movie, list_movies};
pub use model::{Movie, NewMovie};
