//! Domain primitives for the marquee cinema-booking backend.
//!
//! Everything here is framework-free: shared ID/time aliases, the error
//! taxonomy, role constants, the authorization predicates, and the fixed
//! seating layout. HTTP and SQL concerns live in `marquee-api` and
//! `marquee-db` respectively.

pub mod authz;
pub mod error;
pub mod roles;
pub mod seating;
pub mod types;
