//! Handlers for the `/movies` resource (the catalog).
//!
//! A movie and its screening set are one aggregate: create and update
//! always carry the full screening list, and the repository applies it as
//! a single transaction. All validation happens here, before any store
//! access.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveDateTime};
use marquee_core::error::CoreError;
use marquee_core::types::DbId;
use serde::{Deserialize, Serialize};

use marquee_db::models::movie::{MovieInput, MovieWithScreenings, PlayingMovie};
use marquee_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /movies` and `PUT /movies/{id}`.
///
/// Fields are optional at the serde level so presence checks can produce
/// the specific per-field messages below instead of a generic 422.
#[derive(Debug, Deserialize)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub screenings: Option<Vec<String>>,
    pub room: Option<DbId>,
}

/// Response body for `POST /movies`.
#[derive(Debug, Serialize)]
pub struct MovieCreated {
    pub movie_id: DbId,
    pub screenings_added: usize,
}

/// Response body for `PUT /movies/{id}`.
#[derive(Debug, Serialize)]
pub struct MovieUpdated {
    pub screenings_updated: usize,
}

/// Query parameters for `GET /movies/playing`.
#[derive(Debug, Deserialize)]
pub struct PlayingQuery {
    pub date: Option<String>,
}

/// Response body for `GET /movies/playing`.
#[derive(Debug, Serialize)]
pub struct PlayingResponse {
    pub date: String,
    pub count: usize,
    pub data: Vec<PlayingMovie>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /movies
///
/// Create a movie together with its screening set as one atomic unit.
/// Returns 201 with the new movie id and the number of screenings added.
pub async fn create_movie(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Json(input): Json<MoviePayload>,
) -> AppResult<(StatusCode, Json<MovieCreated>)> {
    let (movie_input, screenings) = validate_payload(&input)?;

    let screenings = match screenings {
        Some(times) if !times.is_empty() => times,
        _ => {
            return Err(
                CoreError::validation("At least one screening time is required").into(),
            )
        }
    };

    let movie = MovieRepo::create_with_screenings(&state.pool, &movie_input, &screenings).await?;

    tracing::info!(movie_id = movie.id, screenings = screenings.len(), "Movie created");

    Ok((
        StatusCode::CREATED,
        Json(MovieCreated {
            movie_id: movie.id,
            screenings_added: screenings.len(),
        }),
    ))
}

/// GET /movies
///
/// List all movies with their screening times.
pub async fn list_movies(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MovieWithScreenings>>> {
    let movies = MovieRepo::list_with_screenings(&state.pool).await?;
    Ok(Json(movies))
}

/// PUT /movies/{id}
///
/// Replace a movie's fields and its entire screening set. The new set may
/// be empty, which removes every screening. 404 when the movie does not
/// exist; nothing is written in that case.
pub async fn update_movie(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
    Json(input): Json<MoviePayload>,
) -> AppResult<Json<MovieUpdated>> {
    let (movie_input, screenings) = validate_payload(&input)?;

    // Unlike create, an empty list is valid here -- it clears the set.
    // A missing field is still a client error.
    let screenings =
        screenings.ok_or_else(|| CoreError::validation("Screenings must be an array"))?;

    let updated =
        MovieRepo::update_with_screenings(&state.pool, id, &movie_input, &screenings).await?;

    if updated.is_none() {
        return Err(CoreError::NotFound { entity: "Movie", id }.into());
    }

    tracing::info!(movie_id = id, screenings = screenings.len(), "Movie updated");

    Ok(Json(MovieUpdated {
        screenings_updated: screenings.len(),
    }))
}

/// DELETE /movies/{id}
///
/// Delete a movie and all of its screenings (reservations on those
/// screenings go with them via cascade). 404 when the movie does not exist.
pub async fn delete_movie(
    State(state): State<AppState>,
    RequireManager(_manager): RequireManager,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = MovieRepo::delete_with_screenings(&state.pool, id).await?;
    if deleted {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::NotFound { entity: "Movie", id }.into())
    }
}

/// GET /movies/playing?date=YYYY-MM-DD
///
/// Movies whose run window contains the date, with that date's screening
/// times. The date parameter is validated strictly before any store access.
pub async fn playing_movies(
    State(state): State<AppState>,
    Query(query): Query<PlayingQuery>,
) -> AppResult<Json<PlayingResponse>> {
    let raw = query
        .date
        .ok_or_else(|| CoreError::validation("Date parameter is required"))?;

    let date = parse_strict_date(&raw).ok_or_else(|| {
        CoreError::validation("Invalid date format. Please use YYYY-MM-DD format")
    })?;

    let movies = MovieRepo::list_playing_on(&state.pool, date).await?;

    Ok(Json(PlayingResponse {
        date: raw,
        count: movies.len(),
        data: movies,
    }))
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate the shared movie fields and parse the screening time strings.
///
/// Returns the repository input plus the parsed screening list (`None`
/// when the `screenings` field was absent -- create and update differ in
/// how they treat that).
fn validate_payload(
    input: &MoviePayload,
) -> Result<(MovieInput, Option<Vec<NaiveDateTime>>), AppError> {
    let title = input.title.as_deref().filter(|t| !t.is_empty());
    let (Some(title), Some(duration), Some(start_date), Some(end_date)) = (
        title,
        input.duration,
        input.start_date.as_deref(),
        input.end_date.as_deref(),
    ) else {
        return Err(CoreError::validation(
            "Missing required fields (title, duration, start_date, or end_date)",
        )
        .into());
    };

    if duration <= 0 {
        return Err(CoreError::validation("Duration must be a positive number").into());
    }

    let (Ok(start_date), Ok(end_date)) = (
        NaiveDate::parse_from_str(start_date, "%Y-%m-%d"),
        NaiveDate::parse_from_str(end_date, "%Y-%m-%d"),
    ) else {
        return Err(CoreError::validation("Invalid date format").into());
    };

    let screenings = match &input.screenings {
        None => None,
        Some(times) => {
            let mut parsed = Vec::with_capacity(times.len());
            for time in times {
                parsed.push(
                    parse_screening_time(time)
                        .ok_or_else(|| CoreError::validation("Invalid screening time"))?,
                );
            }
            Some(parsed)
        }
    };

    Ok((
        MovieInput {
            title: title.to_string(),
            description: input.description.clone(),
            duration,
            start_date,
            end_date,
            room: input.room,
        },
        screenings,
    ))
}

/// Parse a screening time in `YYYY-MM-DDTHH:MM:SS` form (a space separator
/// is accepted too).
fn parse_screening_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

/// Parse a strictly formatted `YYYY-MM-DD` calendar date.
///
/// The length guard rejects un-padded variants chrono would accept
/// (e.g. `2023-1-1`), so the accepted grammar matches the documented one.
fn parse_strict_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_date_accepts_padded_calendar_dates() {
        assert_eq!(
            parse_strict_date("2023-06-01"),
            Some(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap())
        );
    }

    #[test]
    fn strict_date_rejects_malformed_input() {
        assert!(parse_strict_date("2023-6-1").is_none());
        assert!(parse_strict_date("06-01-2023").is_none());
        assert!(parse_strict_date("2023-06-01T00:00:00").is_none());
        assert!(parse_strict_date("not-a-date!").is_none());
    }

    #[test]
    fn strict_date_rejects_non_calendar_dates() {
        assert!(parse_strict_date("2023-02-30").is_none());
        assert!(parse_strict_date("2023-13-01").is_none());
    }

    #[test]
    fn screening_time_accepts_t_and_space_separators() {
        assert!(parse_screening_time("2023-06-01T18:00:00").is_some());
        assert!(parse_screening_time("2023-06-01 18:00:00").is_some());
        assert!(parse_screening_time("").is_none());
        assert!(parse_screening_time("18:00:00").is_none());
    }
}
