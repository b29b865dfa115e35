//! Reservation entity model and DTOs.
//!
//! Reservations are insert-only: created through `ReservationRepo::create`
//! and removed only by cascade when their screening or user goes away.

use chrono::NaiveDateTime;
use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full reservation row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub user_id: DbId,
    pub screening_id: DbId,
    pub seat_number: String,
    pub reservation_time: Timestamp,
}

/// DTO for creating a new reservation.
#[derive(Debug)]
pub struct CreateReservation {
    pub user_id: DbId,
    pub screening_id: DbId,
    pub seat_number: String,
}

/// A reservation joined with its screening and movie, for the caller's
/// own-reservations listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserReservation {
    pub id: DbId,
    pub seat_number: String,
    pub reservation_time: Timestamp,
    pub screening_id: DbId,
    pub screening_time: NaiveDateTime,
    pub movie_title: String,
    pub duration: i32,
}
