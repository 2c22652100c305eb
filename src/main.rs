//! StarLearn GUI
//!
//! # What this program is
//! A small desktop front-end (built with `iced`) for a kids' learning app:
//! a demo sign-in screen, then a home screen with toast notifications,
//! sound effects and background music.
//!
//! # How it is put together
//! - `core::*` = the app's logic with no GUI types (toasts, audio, auth, routing)
//! - `gui::*`  = iced state/update/view on top of `core`
//!
//! The loop is the usual iced one:
//! **Message happens -> update changes state -> view redraws**
//!
//! # Concurrency model
//! - Toast expiry timers live on a small tokio runtime owned by `main`.
//! - They never touch GUI state; they publish events that the periodic
//!   `Tick` drains into the renderer.
//! - Sign-in runs as an iced `Task` and comes back as `Message::LoginFinished`.

mod config;
mod core;
mod error;
mod gui;

use crate::core::audio::RodioBackend;
use crate::gui::{StarLearn, subscription, update, view};

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("starlearn=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

fn main() -> iced::Result {
    init_logging();

    let config = config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read settings, using defaults");
        config::Config::default()
    });
    let config_path = config::default_config_path();

    // Toast timers. Kept alive until the window closes.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("starlearn-timers")
        .enable_time()
        .build()
        .map_err(iced::Error::ExecutorCreationFailed)?;
    let handle = runtime.handle().clone();

    tracing::info!(assets = %config.assets_dir.display(), "starting StarLearn");

    iced::application(
        move || {
            StarLearn::new(
                config.clone(),
                config_path.clone(),
                handle.clone(),
                RodioBackend::open_default(),
            )
        },
        update,
        view,
    )
    .title("StarLearn")
    .subscription(subscription)
    .run()
}
