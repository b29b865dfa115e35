//! Repository for the `reservations` table (the reservation ledger).
//!
//! The existence pre-check and the insert are deliberately separate
//! statements: the pre-check gives the common case a friendly conflict
//! answer, while the `uq_reservations_screening_seat` constraint is what
//! actually serializes concurrent attempts. Callers must treat a unique
//! violation from [`ReservationRepo::create`] the same as a positive
//! pre-check.

use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::{CreateReservation, Reservation, UserReservation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, screening_id, seat_number, reservation_time";

/// Provides allocation and lookup operations for seat reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Whether a reservation already exists for the exact
    /// (screening, seat) pair.
    pub async fn is_seat_reserved(
        pool: &PgPool,
        screening_id: DbId,
        seat_number: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE screening_id = $1 AND seat_number = $2
             )",
        )
        .bind(screening_id)
        .bind(seat_number)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Insert a new reservation, returning the created row.
    ///
    /// A concurrent claim of the same seat surfaces as a database error
    /// with code `23505` on `uq_reservations_screening_seat`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (user_id, screening_id, seat_number)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(input.user_id)
            .bind(input.screening_id)
            .bind(&input.seat_number)
            .fetch_one(pool)
            .await
    }

    /// List a user's reservations with screening and movie context,
    /// most recent screening first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserReservation>, sqlx::Error> {
        sqlx::query_as::<_, UserReservation>(
            "SELECT
                r.id,
                r.seat_number,
                r.reservation_time,
                s.id AS screening_id,
                s.screening_time,
                m.title AS movie_title,
                m.duration
             FROM reservations r
             JOIN screenings s ON r.screening_id = s.id
             JOIN movies m ON s.movie_id = m.id
             WHERE r.user_id = $1
             ORDER BY s.screening_time DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Seat numbers already taken for a screening.
    pub async fn reserved_seats(
        pool: &PgPool,
        screening_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT seat_number FROM reservations
             WHERE screening_id = $1
             ORDER BY seat_number",
        )
        .bind(screening_id)
        .fetch_all(pool)
        .await
    }
}
