//! Route definitions for screenings and their statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::screenings;
use crate::state::AppState;

/// Routes for screening detail and stats.
///
/// ```text
/// GET /screenings/{id}   -> get_screening (public)
/// GET /screenings_stats  -> screenings_stats (employee+)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/screenings/{id}", get(screenings::get_screening))
        .route("/screenings_stats", get(screenings::screenings_stats))
}
