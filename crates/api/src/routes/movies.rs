//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// Mutations require the manager or admin role (enforced by handler
/// extractors); reads are public.
///
/// ```text
/// GET    /movies          -> list_movies
/// POST   /movies          -> create_movie
/// GET    /movies/playing  -> playing_movies
/// PUT    /movies/{id}     -> update_movie
/// DELETE /movies/{id}     -> delete_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route("/movies/playing", get(movies::playing_movies))
        .route(
            "/movies/{id}",
            axum::routing::put(movies::update_movie).delete(movies::delete_movie),
        )
}
