//! Shared response envelope types for API handlers.
//!
//! Use these instead of ad-hoc `serde_json::json!({ ... })` to get
//! compile-time type safety and consistent serialization. Bare-collection
//! endpoints (`GET /movies`, `GET /rooms`) return their payload directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "count": N, "data": [...] }` envelope for counted listings
/// (reservations, users, screening stats).
#[derive(Debug, Serialize)]
pub struct CountedResponse<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> CountedResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        CountedResponse {
            count: data.len(),
            data,
        }
    }
}
