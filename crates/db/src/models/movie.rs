//! Movie entity model and DTOs.
//!
//! A movie and its screening set form one aggregate: screenings are only
//! ever written through `MovieRepo` as a full set, never row by row.

use marquee_core::types::{CalendarDate, DbId};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::screening::Screening;

/// Full movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// Runtime in minutes.
    pub duration: i32,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    /// Referenced room, if assigned. Rooms are referenced, never owned.
    pub room: Option<DbId>,
}

/// Fields for inserting or fully replacing a movie row.
///
/// Updates are whole-row replacements (there is no partial-update DTO);
/// the handler validates presence of every required field first.
#[derive(Debug, Clone)]
pub struct MovieInput {
    pub title: String,
    pub description: Option<String>,
    pub duration: i32,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub room: Option<DbId>,
}

/// A movie joined with its full screening set, for catalog listings.
#[derive(Debug, Serialize)]
pub struct MovieWithScreenings {
    #[serde(flatten)]
    pub movie: Movie,
    pub screenings: Vec<Screening>,
}

/// A movie active on a requested date, with only that date's screenings.
///
/// Times are formatted `HH:MM:SS` and ordered chronologically; ids line up
/// index-for-index with the times.
#[derive(Debug, Serialize)]
pub struct PlayingMovie {
    #[serde(flatten)]
    pub movie: Movie,
    pub screenings: Vec<String>,
    pub screening_ids: Vec<DbId>,
}

