// crypto_demo/crypto_workflow/src/trigger.rs

use std::future::Future;

use tokio::task::JoinHandle;
use tracing::error;

/// Handle to one user action running in the background.
///
/// Every trigger issues its own remote call; a newer trigger for the same
/// field does not stop an older one, the field's ticket discards the older
/// response instead. Dropping the handle does not cancel the action.
#[derive(Debug)]
pub struct Trigger<T> {
    handle: JoinHandle<Option<T>>,
}

impl<T: Send + 'static> Trigger<T> {
    /// Spawn `task` on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub(crate) fn spawn<F>(task: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        Trigger {
            handle: tokio::spawn(task),
        }
    }

    /// Abandon the action. The field keeps whatever it showed before.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the action to finish.
    ///
    /// Returns the value written to the field, or `None` if the action was
    /// cancelled or superseded by a newer trigger before it could write.
    pub async fn settled(self) -> Option<T> {
        match self.handle.await {
            Ok(written) => written,
            Err(e) if e.is_cancelled() => None,
            Err(e) => {
                error!(error = %e, "workflow task panicked");
                None
            }
        }
    }
}
