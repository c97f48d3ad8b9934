//! Background cleanup of expired sessions.
//!
//! One sweep deletes all expired property rows and then all user
//! associations left without a session; see
//! [`SessionStoreProvider::sweep_expired`].

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::provider::SessionStoreProvider;

/// Spawns the self-rescheduling cleanup task.
///
/// The first sweep fires immediately. Each following sweep starts `interval`
/// after the previous one *completed*, success or failure, so runs never
/// overlap and a slow sweep pushes the next one back rather than stacking up.
/// Sweep failures are logged at `warn` and absorbed; they never abort the
/// schedule.
///
/// There is no graceful-shutdown handshake: abort the returned handle to
/// stop the task, or let it run until process teardown.
pub fn spawn_cleanup_task(
    store: SessionStoreProvider,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match store.sweep_expired().await {
                Ok(outcome)
                    if outcome.expired_properties > 0 || outcome.orphaned_associations > 0 =>
                {
                    info!(
                        expired_properties = outcome.expired_properties,
                        orphaned_associations = outcome.orphaned_associations,
                        "session store cleanup completed"
                    );
                }
                Ok(_) => debug!("session store cleanup found nothing to delete"),
                Err(e) => warn!(error = %e, "session store cleanup failed"),
            }

            tokio::time::sleep(interval).await;
        }
    })
}
