//! Request-state tracking
//!
//! [`RequestTracker`] wraps asynchronous work with `loading`/`error`
//! bookkeeping. Clones share one state; separate trackers are independent,
//! so callers that need per-operation state (e.g. per member id) use one
//! tracker each.

use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::warn;

use crate::error::user_message;

/// Snapshot of a tracker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestState {
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct TrackerInner {
    /// Operations started and not yet settled
    pending: usize,
    error: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    inner: Arc<Mutex<TrackerInner>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RequestState {
        let inner = self.lock();
        RequestState {
            loading: inner.pending > 0,
            error: inner.error.clone(),
        }
    }

    pub fn loading(&self) -> bool {
        self.lock().pending > 0
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn set_error(&self, error: Option<String>) {
        self.lock().error = error;
    }

    /// Clear the recorded error. Pending operations keep `loading` set.
    pub fn reset(&self) {
        self.lock().error = None;
    }

    /// Run `operation`, recording its lifecycle.
    ///
    /// On failure the normalized message is stored as `error` and returned.
    pub async fn track<T, E, F>(&self, operation: F) -> Result<T, String>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let guard = self.begin();
        match operation.await {
            Ok(value) => {
                guard.settle(None);
                Ok(value)
            }
            Err(e) => {
                let message = user_message(&e);
                warn!(error = %message, "Tracked operation failed");
                guard.settle(Some(message.clone()));
                Err(message)
            }
        }
    }

    /// Like [`track`](Self::track) but yields `None` on failure; the message
    /// stays available through [`error`](Self::error).
    pub async fn with_loading<T, E, F>(&self, operation: F) -> Option<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.track(operation).await.ok()
    }

    fn begin(&self) -> PendingGuard<'_> {
        let mut inner = self.lock();
        inner.pending += 1;
        inner.error = None;
        PendingGuard {
            tracker: self,
            settled: false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, TrackerInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps `pending` balanced even when the tracked future is dropped early.
struct PendingGuard<'a> {
    tracker: &'a RequestTracker,
    settled: bool,
}

impl PendingGuard<'_> {
    fn settle(mut self, error: Option<String>) {
        let mut inner = self.tracker.lock();
        inner.pending = inner.pending.saturating_sub(1);
        inner.error = error;
        self.settled = true;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let mut inner = self.tracker.lock();
            inner.pending = inner.pending.saturating_sub(1);
        }
    }
}
