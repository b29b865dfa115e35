//! Route definitions.
//!
//! Route hierarchy (auth column enforced by handler extractors):
//!
//! ```text
//! /auth/register                   register (public)
//! /auth/login                      login (public)
//! /auth/refresh                    refresh (public)
//! /auth/logout                     logout (requires auth)
//! /auth/me                         identity echo (requires auth)
//!
//! /movies                          GET list (public), POST create (manager+)
//! /movies/playing?date=YYYY-MM-DD  GET movies active on date (public)
//! /movies/{id}                     PUT replace, DELETE (manager+)
//!
//! /rooms                           GET list (public)
//!
//! /screenings/{id}                 GET detail + reserved seats (public)
//! /screenings_stats                GET occupancy stats (employee+)
//!
//! /reservations                    POST create (any authenticated user)
//! /reservations/my                 GET own reservations (client)
//!
//! /admin/users                     GET list (admin)
//! /admin/users/{id}/role           PUT change role (admin)
//! ```

pub mod admin;
pub mod auth;
pub mod health;
pub mod movies;
pub mod reservations;
pub mod rooms;
pub mod screenings;

use axum::Router;

use crate::state::AppState;

/// Build the full API route tree (mounted at the server root).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(movies::router())
        .merge(rooms::router())
        .merge(screenings::router())
        .merge(reservations::router())
        .merge(admin::router())
}
