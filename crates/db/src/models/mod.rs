//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row, plus the create/read DTOs its repository works with.

pub mod movie;
pub mod reservation;
pub mod room;
pub mod screening;
pub mod session;
pub mod user;
