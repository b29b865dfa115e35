//! Request handlers.
//!
//! Each submodule serves one resource. Handlers validate input, delegate to
//! the repositories in `marquee_db`, and map failures via [`crate::error::AppError`].

pub mod admin;
pub mod auth;
pub mod movies;
pub mod reservations;
pub mod rooms;
pub mod screenings;
