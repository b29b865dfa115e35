//! Repository for the movie + screenings aggregate.
//!
//! A movie's screening set is a total-replace attribute: create inserts
//! it, update deletes the old set and inserts the new one, delete removes
//! both. Every write path here is one all-or-nothing transaction.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use marquee_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::movie::{Movie, MovieInput, MovieWithScreenings, PlayingMovie};
use crate::models::screening::Screening;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, duration, start_date, end_date, room";

/// Maintains the movie aggregate as a single consistent unit.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie and its screening set in one transaction.
    pub async fn create_with_screenings(
        pool: &PgPool,
        input: &MovieInput,
        screening_times: &[NaiveDateTime],
    ) -> Result<Movie, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO movies (title, description, duration, start_date, end_date, room)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&insert_query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.room)
            .fetch_one(&mut *tx)
            .await?;

        Self::insert_screenings(&mut tx, movie.id, screening_times).await?;

        tx.commit().await?;
        Ok(movie)
    }

    /// Replace a movie row and its entire screening set in one transaction.
    ///
    /// This is a destructive replace, not a diff: screenings absent from
    /// `screening_times` are removed even if otherwise unchanged, and an
    /// empty slice clears the set. Returns `None` (everything rolled back)
    /// when no movie with `id` exists.
    pub async fn update_with_screenings(
        pool: &PgPool,
        id: DbId,
        input: &MovieInput,
        screening_times: &[NaiveDateTime],
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE movies SET
                title = $2,
                description = $3,
                duration = $4,
                start_date = $5,
                end_date = $6,
                room = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.room)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(movie) = movie else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("DELETE FROM screenings WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        Self::insert_screenings(&mut tx, movie.id, screening_times).await?;

        tx.commit().await?;
        Ok(Some(movie))
    }

    /// Delete a movie and its screenings in one transaction.
    ///
    /// Screenings are removed explicitly ahead of the FK cascade. Returns
    /// `false` when no movie with `id` exists.
    pub async fn delete_with_screenings(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM screenings WHERE movie_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    /// List every movie with its full screening set, screenings ordered
    /// chronologically.
    pub async fn list_with_screenings(
        pool: &PgPool,
    ) -> Result<Vec<MovieWithScreenings>, sqlx::Error> {
        let movies_query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        let movies = sqlx::query_as::<_, Movie>(&movies_query)
            .fetch_all(pool)
            .await?;

        let screenings = sqlx::query_as::<_, Screening>(
            "SELECT id, movie_id, screening_time FROM screenings ORDER BY screening_time",
        )
        .fetch_all(pool)
        .await?;

        let mut by_movie: HashMap<DbId, Vec<Screening>> = HashMap::new();
        for screening in screenings {
            by_movie.entry(screening.movie_id).or_default().push(screening);
        }

        Ok(movies
            .into_iter()
            .map(|movie| {
                let screenings = by_movie.remove(&movie.id).unwrap_or_default();
                MovieWithScreenings { movie, screenings }
            })
            .collect())
    }

    /// List movies whose run window contains `date`, each paired with that
    /// date's screening times (`HH:MM:SS`, chronological) and screening ids.
    ///
    /// Movies in window with no screenings that day still appear, with
    /// empty lists.
    pub async fn list_playing_on(
        pool: &PgPool,
        date: NaiveDate,
    ) -> Result<Vec<PlayingMovie>, sqlx::Error> {
        let movies_query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE start_date <= $1 AND end_date >= $1
             ORDER BY id"
        );
        let movies = sqlx::query_as::<_, Movie>(&movies_query)
            .bind(date)
            .fetch_all(pool)
            .await?;

        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let movie_ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();
        let screenings = sqlx::query_as::<_, Screening>(
            "SELECT id, movie_id, screening_time FROM screenings
             WHERE movie_id = ANY($1) AND screening_time::date = $2
             ORDER BY screening_time",
        )
        .bind(&movie_ids)
        .bind(date)
        .fetch_all(pool)
        .await?;

        let mut by_movie: HashMap<DbId, Vec<Screening>> = HashMap::new();
        for screening in screenings {
            by_movie.entry(screening.movie_id).or_default().push(screening);
        }

        Ok(movies
            .into_iter()
            .map(|movie| {
                let day_screenings = by_movie.remove(&movie.id).unwrap_or_default();
                PlayingMovie {
                    movie,
                    screenings: day_screenings
                        .iter()
                        .map(|s| s.screening_time.format("%H:%M:%S").to_string())
                        .collect(),
                    screening_ids: day_screenings.iter().map(|s| s.id).collect(),
                }
            })
            .collect())
    }

    /// Insert one screening row per time value, inside the caller's
    /// transaction.
    async fn insert_screenings(
        tx: &mut Transaction<'_, Postgres>,
        movie_id: DbId,
        screening_times: &[NaiveDateTime],
    ) -> Result<(), sqlx::Error> {
        for time in screening_times {
            sqlx::query("INSERT INTO screenings (movie_id, screening_time) VALUES ($1, $2)")
                .bind(movie_id)
                .bind(time)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
}
