use crate::types::DbId;

/// Domain error taxonomy shared by all crates.
///
/// Each variant corresponds to one externally observable failure class;
/// `marquee-api` maps them onto HTTP statuses. `Internal` carries detail
/// for the server log only and is sanitized before it reaches a client.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Client-caused: missing or malformed input. Raised before any store
    /// access is attempted.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Duplicate seat reservation, duplicate username, and friends.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No authenticated caller. Distinct from [`CoreError::Forbidden`].
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but the caller's role does not permit the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Validation`] with an owned message.
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }

    /// Shorthand for a [`CoreError::Conflict`] with an owned message.
    pub fn conflict(msg: impl Into<String>) -> Self {
        CoreError::Conflict(msg.into())
    }
}
