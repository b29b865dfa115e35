//! Route definitions for the `/rooms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Routes mounted at `/rooms`.
pub fn router() -> Router<AppState> {
    Router::new().route("/rooms", get(rooms::list_rooms))
}
