//! Screening entity model and read shapes.

use chrono::NaiveDateTime;
use marquee_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Full screening row from the `screenings` table.
///
/// `screening_time` is a wall-clock value (the time printed on the
/// ticket), stored as TIMESTAMP without time zone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Screening {
    pub id: DbId,
    pub movie_id: DbId,
    pub screening_time: NaiveDateTime,
}

/// A screening joined with its movie, for the detail endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScreeningDetail {
    pub id: DbId,
    pub movie_id: DbId,
    pub screening_time: NaiveDateTime,
    pub title: String,
    pub duration: i32,
}

/// Occupancy summary for one upcoming screening.
///
/// `total_seats` is always the fixed room capacity;
/// `available_seats` and `occupancy_rate` are derived from it in
/// `ScreeningRepo::upcoming_stats`.
#[derive(Debug, Serialize)]
pub struct ScreeningStats {
    pub id: DbId,
    pub movie_title: String,
    pub duration: i32,
    pub screening_time: NaiveDateTime,
    pub reserved_seats: i64,
    pub total_seats: i64,
    pub reserved_seat_numbers: Vec<String>,
    pub available_seats: i64,
    /// Rounded percentage of seats reserved.
    pub occupancy_rate: i64,
}
