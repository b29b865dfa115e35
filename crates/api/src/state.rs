use std::sync::Arc;

use tokio::sync::mpsc;

use crate::background::confirmations::ConfirmationTask;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The pool is injected here rather than reached for globally, so tests can
/// run against isolated databases.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: marquee_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Best-effort queue feeding the reservation-confirmation worker.
    pub confirmations: mpsc::Sender<ConfirmationTask>,
}
