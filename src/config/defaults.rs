//! Default values for user preferences and timings.

// Audio

/// Sound effects are on for a fresh install.
pub const DEFAULT_SOUND_ENABLED: bool = true;

/// Background music is on for a fresh install.
pub const DEFAULT_MUSIC_ENABLED: bool = true;

/// Effects volume (0.0 to 1.0).
pub const DEFAULT_EFFECTS_VOLUME: f32 = 0.5;

/// Background music volume (0.0 to 1.0). Quieter than effects.
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.3;

pub const MIN_VOLUME: f32 = 0.0;
pub const MAX_VOLUME: f32 = 1.0;

/// Playback rate bounds for per-call overrides.
pub const MIN_RATE: f32 = 0.5;
pub const MAX_RATE: f32 = 4.0;

/// Folder holding `sounds/` and `music/`, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

// Login

/// Simulated authentication round-trip.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;

// Toasts

/// Auto-dismiss for success/error/warning/info toasts.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Achievements stay up longer.
pub const ACHIEVEMENT_TOAST_DURATION_MS: u64 = 8000;

/// Fade-in time for a newly shown toast card.
pub const TOAST_FADE_IN_MS: u64 = 250;

// UI loop

/// Period of the UI tick (drains toast events, advances fades).
pub const TICK_MS: u64 = 100;
