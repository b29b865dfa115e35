//! Repository for screening reads that cross the movie boundary.
//!
//! Screening *writes* go through `MovieRepo` only -- the screening set is
//! an attribute of the movie aggregate.

use chrono::{NaiveDate, NaiveDateTime};
use marquee_core::seating;
use marquee_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::screening::{ScreeningDetail, ScreeningStats};

/// Provides read operations for individual screenings and occupancy stats.
pub struct ScreeningRepo;

/// Raw aggregation row behind [`ScreeningRepo::upcoming_stats`].
#[derive(FromRow)]
struct StatsRow {
    id: DbId,
    movie_title: String,
    duration: i32,
    screening_time: NaiveDateTime,
    reserved_seats: i64,
    reserved_seat_numbers: Vec<String>,
}

impl ScreeningRepo {
    /// Find a screening joined with its movie.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ScreeningDetail>, sqlx::Error> {
        sqlx::query_as::<_, ScreeningDetail>(
            "SELECT s.id, s.movie_id, s.screening_time, m.title, m.duration
             FROM screenings s
             JOIN movies m ON s.movie_id = m.id
             WHERE s.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Occupancy stats for every upcoming screening (on or after `today`,
    /// movie still inside its run window), ordered chronologically.
    pub async fn upcoming_stats(
        pool: &PgPool,
        today: NaiveDate,
    ) -> Result<Vec<ScreeningStats>, sqlx::Error> {
        let rows = sqlx::query_as::<_, StatsRow>(
            "SELECT
                s.id,
                m.title AS movie_title,
                m.duration,
                s.screening_time,
                COUNT(r.id) AS reserved_seats,
                COALESCE(
                    ARRAY_AGG(r.seat_number ORDER BY r.seat_number)
                        FILTER (WHERE r.id IS NOT NULL),
                    '{}'
                ) AS reserved_seat_numbers
             FROM screenings s
             JOIN movies m ON s.movie_id = m.id
             LEFT JOIN reservations r ON r.screening_id = s.id
             WHERE s.screening_time::date >= $1 AND m.end_date >= $1
             GROUP BY s.id, m.title, m.duration, s.screening_time
             ORDER BY s.screening_time ASC",
        )
        .bind(today)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ScreeningStats {
                id: row.id,
                movie_title: row.movie_title,
                duration: row.duration,
                screening_time: row.screening_time,
                reserved_seats: row.reserved_seats,
                total_seats: seating::ROOM_CAPACITY,
                reserved_seat_numbers: row.reserved_seat_numbers,
                available_seats: seating::available_seats(row.reserved_seats),
                occupancy_rate: seating::occupancy_rate(row.reserved_seats),
            })
            .collect())
    }
}
