//! Best-effort reservation confirmations.
//!
//! After a successful reservation the handler enqueues a
//! [`ConfirmationTask`]; this worker picks it up, enriches it with user
//! and screening context, and emits the confirmation (currently a
//! structured log line -- the seam where an email or push sender plugs
//! in). Losing a task is acceptable: confirmations are not part of the
//! reservation's correctness.

use sqlx::PgPool;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use marquee_core::types::DbId;
use marquee_db::repositories::{ScreeningRepo, UserRepo};

/// Queued confirmation for one successful reservation.
#[derive(Debug)]
pub struct ConfirmationTask {
    pub user_id: DbId,
    pub screening_id: DbId,
    pub seat_number: String,
}

/// Bounded queue depth; the sender drops tasks once this backs up.
const QUEUE_DEPTH: usize = 256;

/// Create the confirmation channel with the standard depth.
pub fn channel() -> (mpsc::Sender<ConfirmationTask>, mpsc::Receiver<ConfirmationTask>) {
    mpsc::channel(QUEUE_DEPTH)
}

/// Run the confirmation worker loop.
///
/// Drains the queue until `cancel` is triggered or every sender is gone.
pub async fn run(
    pool: PgPool,
    mut tasks: mpsc::Receiver<ConfirmationTask>,
    cancel: CancellationToken,
) {
    tracing::info!("Confirmation worker started");

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Confirmation worker stopping");
                break;
            }
            task = tasks.recv() => {
                let Some(task) = task else {
                    tracing::info!("Confirmation queue closed, worker stopping");
                    break;
                };
                if let Err(e) = confirm(&pool, &task).await {
                    tracing::warn!(error = %e, user_id = task.user_id, "Confirmation failed");
                }
            }
        }
    }
}

/// Emit one confirmation, looking up the names behind the ids.
async fn confirm(pool: &PgPool, task: &ConfirmationTask) -> Result<(), sqlx::Error> {
    let user = UserRepo::find_by_id(pool, task.user_id).await?;
    let screening = ScreeningRepo::find_detail(pool, task.screening_id).await?;

    // Either row may be gone already (cascade after a movie delete); the
    // confirmation is simply dropped then.
    let (Some(user), Some(screening)) = (user, screening) else {
        tracing::debug!(
            user_id = task.user_id,
            screening_id = task.screening_id,
            "Confirmation target no longer exists"
        );
        return Ok(());
    };

    tracing::info!(
        username = %user.username,
        movie = %screening.title,
        screening_time = %screening.screening_time,
        seat = %task.seat_number,
        "Reservation confirmed"
    );
    Ok(())
}
