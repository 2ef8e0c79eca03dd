//! View-scoped background tasks.
//!
//! A fetch or ticker spawned for a view is bound to the view's lifetime:
//! dropping the handle aborts the task, so results arriving after teardown
//! are discarded instead of mutating a view that no longer exists.

use std::future::Future;

use tokio::task::JoinHandle;

/// A spawned task that is aborted when its handle is dropped.
#[derive(Debug)]
pub struct ScopedTask<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> ScopedTask<T> {
    /// Spawn `future` on the current runtime, scoped to the returned handle.
    #[must_use]
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(future)),
        }
    }

    /// Wait for the task; `None` when it was aborted or panicked.
    pub async fn join(mut self) -> Option<T> {
        let handle = self.handle.take()?;

        handle.await.ok()
    }

    /// Abort the task without waiting for it.
    pub fn abort(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl<T> Drop for ScopedTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
