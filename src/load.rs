//! Async Load/Error/Loading state machine
//!
//! Every screen used to hand-roll the same `loading`/`error`/`data`
//! triple; this module is that triple, once. Phases run
//! `Idle -> Loading -> {Success, Failed}` and re-enter `Loading` on any
//! re-fetch trigger (mount, pull-to-refresh, pagination, post-mutation
//! refresh).
//!
//! A new load supersedes a prior in-flight one through a monotonically
//! increasing request token: a completion whose token is not the latest
//! issued one is discarded, so rapid pagination or filter changes can
//! never apply out of order. `detach` invalidates every outstanding token
//! when a screen unmounts.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    /// A blocking, non-dismissible modal is up while this is current.
    Loading,
    Success,
    Failed,
}

/// What the screen renders: the phase, the last-known-good data (kept
/// across failures, never destructively cleared), and the modal message
/// of the most recent failure.
#[derive(Debug, Clone)]
pub struct LoadSnapshot<T> {
    pub phase: LoadPhase,
    pub data: Option<T>,
    pub error: Option<String>,
    pub requires_login: bool,
}

/// Proof that a load was issued; pass it back to [`Loader::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

struct LoaderInner<T> {
    phase: LoadPhase,
    data: Option<T>,
    error: Option<String>,
    requires_login: bool,
    latest: u64,
}

pub struct Loader<T> {
    inner: Arc<Mutex<LoaderInner<T>>>,
}

// Derived Clone would require T: Clone on the handle itself.
impl<T> Clone for Loader<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loader<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(LoaderInner {
                phase: LoadPhase::Idle,
                data: None,
                error: None,
                requires_login: false,
                latest: 0,
            })),
        }
    }

    /// Enter `Loading` and issue the token that makes this load the
    /// authoritative one. Existing data stays visible behind the modal.
    pub async fn begin(&self) -> LoadToken {
        let mut inner = self.inner.lock().await;
        inner.latest += 1;
        inner.phase = LoadPhase::Loading;
        inner.error = None;
        inner.requires_login = false;
        LoadToken(inner.latest)
    }

    /// Apply a finished load. Returns `false` (and changes nothing) when
    /// a newer load has been issued since `token`, or the loader was
    /// detached; the stale response is discarded.
    pub async fn complete(&self, token: LoadToken, result: ApiResult<T>) -> bool {
        let mut inner = self.inner.lock().await;
        if token.0 != inner.latest {
            tracing::debug!(
                token = token.0,
                latest = inner.latest,
                "discarding superseded load result"
            );
            return false;
        }
        match result {
            Ok(data) => {
                inner.phase = LoadPhase::Success;
                inner.data = Some(data);
                inner.error = None;
                inner.requires_login = false;
            }
            Err(error) => {
                // Last-known-good data is kept; only the message changes.
                inner.phase = LoadPhase::Failed;
                inner.requires_login = error.requires_login();
                inner.error = Some(error.user_message());
            }
        }
        true
    }

    /// Run one load end to end: begin, await the fetch, complete.
    /// Returns whether the result was applied.
    pub async fn run<Fut>(&self, fetch: Fut) -> bool
    where
        Fut: Future<Output = ApiResult<T>>,
    {
        let token = self.begin().await;
        let result = fetch.await;
        self.complete(token, result).await
    }

    /// Screen unmount: invalidate every outstanding token so a
    /// late-resolving response never updates state.
    pub async fn detach(&self) {
        let mut inner = self.inner.lock().await;
        inner.latest += 1;
        if inner.phase == LoadPhase::Loading {
            inner.phase = if inner.data.is_some() {
                LoadPhase::Success
            } else {
                LoadPhase::Idle
            };
        }
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.phase == LoadPhase::Loading
    }

    /// Dismiss the error modal, keeping the data on screen.
    pub async fn clear_error(&self) {
        let mut inner = self.inner.lock().await;
        if inner.phase == LoadPhase::Failed {
            inner.error = None;
            inner.requires_login = false;
            inner.phase = if inner.data.is_some() {
                LoadPhase::Success
            } else {
                LoadPhase::Idle
            };
        }
    }

    /// Fail locally without touching the request counter, e.g. when
    /// validation rejects the input before dispatch.
    pub async fn fail_local(&self, error: ApiError) {
        let mut inner = self.inner.lock().await;
        inner.phase = LoadPhase::Failed;
        inner.requires_login = error.requires_login();
        inner.error = Some(error.user_message());
    }
}

impl<T: Clone> Loader<T> {
    pub async fn snapshot(&self) -> LoadSnapshot<T> {
        let inner = self.inner.lock().await;
        LoadSnapshot {
            phase: inner.phase,
            data: inner.data.clone(),
            error: inner.error.clone(),
            requires_login: inner.requires_login,
        }
    }

    pub async fn data(&self) -> Option<T> {
        self.inner.lock().await.data.clone()
    }
}
