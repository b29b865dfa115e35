//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-row aggregate writes open
//! their own transaction; everything else runs as a single statement.

pub mod movie_repo;
pub mod reservation_repo;
pub mod room_repo;
pub mod screening_repo;
pub mod session_repo;
pub mod user_repo;

pub use movie_repo::MovieRepo;
pub use reservation_repo::ReservationRepo;
pub use room_repo::RoomRepo;
pub use screening_repo::ScreeningRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
