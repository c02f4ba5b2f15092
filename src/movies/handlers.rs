//! HTTP handlers for the movie endpoints.

use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::{CurrentUser, LenientJson};
use crate::movies::model::{Movie, NewMovie};
use crate::store::SharedStore;

/// Body of `POST /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct AddMovieRequest {
    pub title: Option<String>,
    pub category: Option<String>,
}

/// Body of the movie listing: movies grouped by category.
#[derive(Debug, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub movies: BTreeMap<String, Vec<Movie>>,
}

/// Add a movie submitted by the session user.
///
/// # Errors
///
/// * 400 `missing information` - `title` or `category` absent/empty
/// * 500 `You are not authenticated` - no session identity (legacy status)
/// * 500 `Failed to add movie` - store rejected the insert
pub async fn add_movie(
    State(store): State<SharedStore>,
    user: CurrentUser,
    LenientJson(request): LenientJson<AddMovieRequest>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::Validation("missing information"))?;
    let category = request
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(ApiError::Validation("missing information"))?;

    let identity = user.0.ok_or(ApiError::Unauthenticated)?;

    let movie = store
        .insert_movie(NewMovie {
            title: title.to_string(),
            category: category.to_string(),
            user: identity.user_id,
        })
        .await
        .map_err(|e| {
            tracing::error!("failed to add movie for {}: {e}", identity.user_id);
            ApiError::Persistence("Failed to add movie")
        })?;

    Ok((StatusCode::CREATED, Json(movie)))
}

/// List all movies grouped by category. Public, no identity required.
///
/// # Errors
///
/// * 500 `Failed to fetch movies` - store rejected the query
pub async fn list_movies(
    State(store): State<SharedStore>,
) -> Result<Json<MovieListResponse>, ApiError> {
    let movies = store.list_movies().await.map_err(|e| {
        tracing::error!("failed to fetch movies: {e}");
        ApiError::Persistence("Failed to fetch movies")
    })?;

    let mut grouped: BTreeMap<String, Vec<Movie>> = BTreeMap::new();
    for movie in movies {
        grouped.entry(movie.category.clone()).or_default().push(movie);
    }

    Ok(Json(MovieListResponse { movies: grouped }))
}
