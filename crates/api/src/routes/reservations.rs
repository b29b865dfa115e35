//! Route definitions for the `/reservations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// ```text
/// POST /reservations     -> create_reservation (any authenticated user)
/// GET  /reservations/my  -> my_reservations (client)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reservations", post(reservations::create_reservation))
        .route("/reservations/my", get(reservations::my_reservations))
}
