//! core/toast/center.rs
//! Toast service: store + expiry timers + broadcast of changes.
//!
//! Owns:
//! - the ordered `ToastStore`
//! - one abortable timer task per auto-expiring toast
//! - a broadcast channel every renderer subscribes to
//!
//! Cheap to clone; all clones share the same store.
//! Timer tasks hold only a weak reference, so dropping every clone
//! turns pending timers into no-ops.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::AbortHandle;

use super::store::ToastStore;
use super::types::{Toast, ToastId, ToastKind};

/// Slow subscribers past this many events see `Lagged` and resync from `snapshot()`.
const EVENT_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    Expired,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastEvent {
    Shown(Toast),
    Removed { id: ToastId, reason: RemovalReason },
}

#[derive(Debug, Default)]
struct Inner {
    store: ToastStore,
    timers: HashMap<ToastId, AbortHandle>,
}

#[derive(Clone)]
pub struct ToastCenter {
    inner: Arc<Mutex<Inner>>,
    events: broadcast::Sender<ToastEvent>,
    runtime: Handle,
}

impl std::fmt::Debug for ToastCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastCenter")
            .field("live", &self.len())
            .finish_non_exhaustive()
    }
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ToastCenter {
    /// `runtime` is where expiry timers run.
    pub fn new(runtime: Handle) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            events,
            runtime,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ToastEvent> {
        self.events.subscribe()
    }

    pub fn success(&self, title: impl Into<String>, message: Option<&str>) -> ToastId {
        self.notify(ToastKind::Success, title, message)
    }

    pub fn error(&self, title: impl Into<String>, message: Option<&str>) -> ToastId {
        self.notify(ToastKind::Error, title, message)
    }

    pub fn warning(&self, title: impl Into<String>, message: Option<&str>) -> ToastId {
        self.notify(ToastKind::Warning, title, message)
    }

    pub fn info(&self, title: impl Into<String>, message: Option<&str>) -> ToastId {
        self.notify(ToastKind::Info, title, message)
    }

    pub fn achievement(&self, title: impl Into<String>, message: Option<&str>) -> ToastId {
        self.notify(ToastKind::Achievement, title, message)
    }

    fn notify(&self, kind: ToastKind, title: impl Into<String>, message: Option<&str>) -> ToastId {
        let mut toast = Toast::new(kind, title);
        if let Some(message) = message {
            toast = toast.with_message(message);
        }
        self.push(toast)
    }

    /// Appends `toast` and schedules its expiry.
    ///
    /// Pushing a toast whose id is already live does nothing.
    pub fn push(&self, toast: Toast) -> ToastId {
        let id = toast.id();
        let duration = toast.duration();
        let expires = toast.auto_expires();

        let mut inner = lock(&self.inner);
        if !inner.store.push(toast.clone()) {
            return id;
        }

        if expires {
            let timer = self.spawn_expiry(id, duration);
            inner.timers.insert(id, timer);
        }

        tracing::debug!(%id, kind = toast.kind().label(), ?duration, "toast shown");
        // Sent under the lock so Shown always precedes this toast's Removed.
        let _ = self.events.send(ToastEvent::Shown(toast));

        id
    }

    fn spawn_expiry(&self, id: ToastId, duration: Duration) -> AbortHandle {
        let inner: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        let events = self.events.clone();

        self.runtime
            .spawn(async move {
                tokio::time::sleep(duration).await;

                let Some(inner) = inner.upgrade() else {
                    return;
                };
                let mut inner = lock(&inner);
                inner.timers.remove(&id);

                if inner.store.remove(id).is_some() {
                    tracing::debug!(%id, "toast expired");
                    let _ = events.send(ToastEvent::Removed {
                        id,
                        reason: RemovalReason::Expired,
                    });
                }
            })
            .abort_handle()
    }

    /// Removes a toast now and cancels its timer.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let mut inner = lock(&self.inner);

        if let Some(timer) = inner.timers.remove(&id) {
            timer.abort();
        }

        if inner.store.remove(id).is_none() {
            return false;
        }

        tracing::debug!(%id, "toast dismissed");
        let _ = self.events.send(ToastEvent::Removed {
            id,
            reason: RemovalReason::Dismissed,
        });
        true
    }

    /// Dismisses every live toast.
    pub fn clear(&self) {
        let mut inner = lock(&self.inner);

        for (_, timer) in inner.timers.drain() {
            timer.abort();
        }

        for toast in inner.store.drain() {
            let _ = self.events.send(ToastEvent::Removed {
                id: toast.id(),
                reason: RemovalReason::Dismissed,
            });
        }
    }

    /// Live toasts in display order.
    pub fn snapshot(&self) -> Vec<Toast> {
        lock(&self.inner).store.iter().cloned().collect()
    }

    #[cfg(test)]
    pub fn contains(&self, id: ToastId) -> bool {
        lock(&self.inner).store.contains(id)
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).store.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.inner).store.is_empty()
    }

    /// Number of expiry timers still pending.
    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        lock(&self.inner).timers.len()
    }
}
