//! Handlers for screening detail and occupancy statistics.

use axum::extract::{Path, State};
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use serde::Serialize;

use marquee_db::models::screening::{ScreeningDetail, ScreeningStats};
use marquee_db::repositories::{ReservationRepo, ScreeningRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireEmployee;
use crate::response::{CountedResponse, DataResponse};
use crate::state::AppState;

/// Payload for `GET /screenings/{id}`: the screening plus its taken seats.
#[derive(Debug, Serialize)]
pub struct ScreeningWithSeats {
    pub screening: ScreeningDetail,
    pub reserved_seats: Vec<String>,
}

/// GET /screenings/{id}
///
/// Screening detail (with movie context) and the reserved seat list the
/// seat picker renders against.
pub async fn get_screening(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ScreeningWithSeats>>> {
    let screening = ScreeningRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Screening",
            id,
        })?;

    let reserved_seats = ReservationRepo::reserved_seats(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: ScreeningWithSeats {
            screening,
            reserved_seats,
        },
    }))
}

/// GET /screenings_stats
///
/// Occupancy stats for all upcoming screenings. Staff only.
pub async fn screenings_stats(
    State(state): State<AppState>,
    RequireEmployee(_staff): RequireEmployee,
) -> AppResult<Json<CountedResponse<ScreeningStats>>> {
    let today = chrono::Utc::now().date_naive();
    let stats = ScreeningRepo::upcoming_stats(&state.pool, today).await?;
    Ok(Json(CountedResponse::new(stats)))
}
