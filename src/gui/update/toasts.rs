//! gui/update/toasts.rs
//! Toast renderer bridge.
//!
//! - producers call `state.toasts.*` directly
//! - the layer only changes by draining the broadcast receiver here

use std::time::Instant;

use iced::Task;
use tokio::sync::broadcast::error::TryRecvError;

use super::super::state::{Message, StarLearn};
use crate::core::audio::{SoundEffect, SoundOptions};
use crate::core::toast::{ToastId, ToastKind};

pub(crate) fn drain_events(state: &mut StarLearn, now: Instant) {
    state.toast_layer.set_now(now);

    loop {
        match state.toast_events.try_recv() {
            Ok(event) => state.toast_layer.apply(event, now),
            Err(TryRecvError::Lagged(missed)) => {
                tracing::warn!(missed, "toast renderer lagged; resyncing");
                state.toast_layer.resync(state.toasts.snapshot(), now);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}

pub(crate) fn show_demo(state: &mut StarLearn, kind: ToastKind) -> Task<Message> {
    let (title, message) = match kind {
        ToastKind::Success => ("Great job!", Some("You answered correctly.")),
        ToastKind::Error => ("Not quite", Some("Give it another try.")),
        ToastKind::Warning => ("Almost out of time", None),
        ToastKind::Info => ("New lesson unlocked", Some("Fractions are ready.")),
        ToastKind::Achievement => ("Achievement unlocked!", Some("7-day streak")),
    };

    match kind {
        ToastKind::Success => state.toasts.success(title, message),
        ToastKind::Error => state.toasts.error(title, message),
        ToastKind::Warning => state.toasts.warning(title, message),
        ToastKind::Info => state.toasts.info(title, message),
        ToastKind::Achievement => state.toasts.achievement(title, message),
    };

    let effect = match kind {
        ToastKind::Success => SoundEffect::Success,
        ToastKind::Error => SoundEffect::Error,
        ToastKind::Achievement => SoundEffect::Achievement,
        ToastKind::Warning | ToastKind::Info => SoundEffect::Notification,
    };
    state.audio.play_sound(effect, SoundOptions::default());

    drain_events(state, Instant::now());
    Task::none()
}

/// User clicked × on a card.
pub(crate) fn dismiss(state: &mut StarLearn, id: ToastId) -> Task<Message> {
    state.toasts.dismiss(id);
    drain_events(state, Instant::now());
    Task::none()
}

pub(crate) fn clear(state: &mut StarLearn) -> Task<Message> {
    state.toasts.clear();
    drain_events(state, Instant::now());
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::state::test_support;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn demo_toast_appears_in_layer_and_expires() {
        let mut state = test_support::state();

        let _ = show_demo(&mut state, ToastKind::Success);
        assert_eq!(state.toast_layer.len(), 1);
        assert_eq!(state.toast_layer.entries()[0].toast.title(), "Great job!");

        tokio::time::sleep(Duration::from_millis(5001)).await;
        tokio::task::yield_now().await;
        drain_events(&mut state, Instant::now());
        assert_eq!(state.toast_layer.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn close_button_removes_card_immediately() {
        let mut state = test_support::state();
        let _ = show_demo(&mut state, ToastKind::Achievement);
        let id = state.toast_layer.entries()[0].toast.id();

        let _ = dismiss(&mut state, id);
        assert_eq!(state.toast_layer.len(), 0);
        assert!(state.toasts.is_empty());

        // second click on a stale card
        let _ = dismiss(&mut state, id);
        assert_eq!(state.toast_layer.len(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_from_other_producers_reach_the_layer() {
        let mut state = test_support::state();
        let producer = state.toasts.clone();

        producer.info("From elsewhere", None);
        producer.warning("Also elsewhere", None);
        drain_events(&mut state, Instant::now());

        let titles: Vec<&str> = state
            .toast_layer
            .entries()
            .iter()
            .map(|e| e.toast.title())
            .collect();
        assert_eq!(titles, ["From elsewhere", "Also elsewhere"]);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_empties_layer() {
        let mut state = test_support::state();
        for kind in ToastKind::ALL {
            let _ = show_demo(&mut state, kind);
        }
        assert_eq!(state.toast_layer.len(), 5);

        let _ = clear(&mut state);
        assert_eq!(state.toast_layer.len(), 0);
    }
}
