//! Handler for the `/rooms` resource.

use axum::extract::State;
use axum::Json;

use marquee_db::models::room::Room;
use marquee_db::repositories::RoomRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /rooms
///
/// List all rooms.
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = RoomRepo::list(&state.pool).await?;
    Ok(Json(rooms))
}
