//! Repository for the `rooms` table.

use sqlx::PgPool;

use crate::models::room::Room;

pub struct RoomRepo;

impl RoomRepo {
    /// List all rooms.
    pub async fn list(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        sqlx::query_as::<_, Room>("SELECT id, name FROM rooms ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
