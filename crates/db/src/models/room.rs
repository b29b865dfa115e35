//! Room entity model.

use marquee_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full room row from the `rooms` table. Capacity is not stored; every
/// room uses the fixed layout in `marquee_core::seating`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
}
