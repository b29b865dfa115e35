//! Fixed seating layout shared by every room.
//!
//! The current schema stores no per-room capacity; every room is 8 rows of
//! 10 seats. Seat numbers follow the `<row-letter><seat-number>` convention
//! ("A1" .. "H10"). The convention is a UI-level agreement -- the
//! reservation path stores whatever seat label the client sends and relies
//! on the (screening, seat) uniqueness constraint, not on label shape.

/// Rows per room (A..H).
pub const SEAT_ROWS: i64 = 8;

/// Seats per row (1..10).
pub const SEATS_PER_ROW: i64 = 10;

/// Total seats per room.
pub const ROOM_CAPACITY: i64 = SEAT_ROWS * SEATS_PER_ROW;

/// Seats still free given a reserved count.
pub fn available_seats(reserved: i64) -> i64 {
    ROOM_CAPACITY - reserved
}

/// Reserved seats as a rounded percentage of [`ROOM_CAPACITY`].
pub fn occupancy_rate(reserved: i64) -> i64 {
    ((reserved as f64 / ROOM_CAPACITY as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_eight_by_ten() {
        assert_eq!(ROOM_CAPACITY, 80);
    }

    #[test]
    fn occupancy_rounds_to_nearest_percent() {
        assert_eq!(occupancy_rate(0), 0);
        assert_eq!(occupancy_rate(40), 50);
        assert_eq!(occupancy_rate(80), 100);
        // 1/80 = 1.25% -> 1; 3/80 = 3.75% -> 4
        assert_eq!(occupancy_rate(1), 1);
        assert_eq!(occupancy_rate(3), 4);
    }

    #[test]
    fn available_seats_complements_reserved() {
        assert_eq!(available_seats(0), 80);
        assert_eq!(available_seats(79), 1);
        assert_eq!(available_seats(80), 0);
    }
}
