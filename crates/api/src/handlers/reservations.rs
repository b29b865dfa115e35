//! Handlers for the `/reservations` resource (the seat ledger).
//!
//! Creation is the one genuinely racy path in the system: the existence
//! pre-check and the insert are separate statements, so two concurrent
//! requests for the same seat can both pass the check. The
//! `uq_reservations_screening_seat` constraint decides the race; the
//! loser's `23505` is mapped to the same 409 the pre-check produces.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use serde::Deserialize;

use marquee_db::models::reservation::{CreateReservation, Reservation, UserReservation};
use marquee_db::repositories::ReservationRepo;

use crate::background::confirmations::ConfirmationTask;
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireClient;
use crate::response::CountedResponse;
use crate::state::AppState;

/// Constraint backing the at-most-one-reservation-per-seat invariant.
const SEAT_CONSTRAINT: &str = "uq_reservations_screening_seat";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /reservations`.
#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    pub screening_id: Option<DbId>,
    pub seat_number: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /reservations
///
/// Reserve a seat for a screening. Requires authentication (any role).
/// Conflicts -- whether caught by the pre-check or by the constraint on
/// insert -- return 409.
pub async fn create_reservation(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let (Some(screening_id), Some(seat_number)) = (input.screening_id, input.seat_number) else {
        return Err(CoreError::validation("Missing required fields").into());
    };

    // Fast path for the common case; the unique constraint is what
    // actually guarantees at-most-one under concurrency.
    if ReservationRepo::is_seat_reserved(&state.pool, screening_id, &seat_number).await? {
        return Err(CoreError::conflict("Seat already reserved").into());
    }

    let create = CreateReservation {
        user_id: user.user_id,
        screening_id,
        seat_number,
    };

    let reservation = match ReservationRepo::create(&state.pool, &create).await {
        Ok(reservation) => reservation,
        Err(err) if is_unique_violation(&err, SEAT_CONSTRAINT) => {
            return Err(CoreError::conflict("Seat already reserved").into());
        }
        Err(err) => return Err(AppError::Database(err)),
    };

    tracing::info!(
        reservation_id = reservation.id,
        screening_id,
        seat = %reservation.seat_number,
        "Reservation created"
    );

    // Fire-and-forget confirmation; a full or stopped queue is not an error.
    let task = ConfirmationTask {
        user_id: reservation.user_id,
        screening_id: reservation.screening_id,
        seat_number: reservation.seat_number.clone(),
    };
    if state.confirmations.try_send(task).is_err() {
        tracing::debug!("Confirmation queue unavailable, skipping notification");
    }

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /reservations/my
///
/// The caller's own reservations, most recent screening first.
pub async fn my_reservations(
    State(state): State<AppState>,
    RequireClient(user): RequireClient,
) -> AppResult<Json<CountedResponse<UserReservation>>> {
    let reservations = ReservationRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(CountedResponse::new(reservations)))
}
