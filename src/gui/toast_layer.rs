//! gui/toast_layer.rs
//! The renderer's copy of the live toasts.
//!
//! Fed from the `ToastCenter` broadcast (see update/toasts.rs); remembers
//! when each card appeared so the view can fade it in.

use std::time::{Duration, Instant};

use crate::config::TOAST_FADE_IN_MS;
use crate::core::toast::{Toast, ToastEvent, ToastId};

#[derive(Debug, Clone)]
pub(crate) struct ShownToast {
    pub toast: Toast,
    pub shown_at: Instant,
}

impl ShownToast {
    /// 0.0 -> 1.0 over the fade-in window.
    pub fn opacity(&self, now: Instant) -> f32 {
        let fade = Duration::from_millis(TOAST_FADE_IN_MS);
        let elapsed = now.saturating_duration_since(self.shown_at);
        (elapsed.as_secs_f32() / fade.as_secs_f32()).min(1.0)
    }
}

#[derive(Debug, Default)]
pub(crate) struct ToastLayer {
    entries: Vec<ShownToast>,
    now: Option<Instant>,
}

impl ToastLayer {
    pub fn apply(&mut self, event: ToastEvent, now: Instant) {
        match event {
            ToastEvent::Shown(toast) => {
                if !self.contains(toast.id()) {
                    self.entries.push(ShownToast {
                        toast,
                        shown_at: now,
                    });
                }
            }
            ToastEvent::Removed { id, .. } => {
                self.entries.retain(|e| e.toast.id() != id);
            }
        }
    }

    /// Rebuilds from the authoritative list after missed events.
    /// Cards already on screen keep their appearance time.
    pub fn resync(&mut self, live: Vec<Toast>, now: Instant) {
        let previous = std::mem::take(&mut self.entries);
        self.entries = live
            .into_iter()
            .map(|toast| {
                let shown_at = previous
                    .iter()
                    .find(|e| e.toast.id() == toast.id())
                    .map_or(now, |e| e.shown_at);
                ShownToast { toast, shown_at }
            })
            .collect();
    }

    pub fn contains(&self, id: ToastId) -> bool {
        self.entries.iter().any(|e| e.toast.id() == id)
    }

    pub fn entries(&self) -> &[ShownToast] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Time of the last UI tick; the view reads opacity against it.
    pub fn set_now(&mut self, now: Instant) {
        self.now = Some(now);
    }

    pub fn now(&self) -> Instant {
        self.now.unwrap_or_else(Instant::now)
    }
}
