//! gui/update/audio.rs
//! GUI -> AudioController bridge, plus saving sound/music preferences.
//!
//! GUI never touches rodio/symphonia directly.

use std::time::{Duration, Instant};

use iced::Task;

use super::super::state::{FadeDirection, Message, StarLearn};
use crate::config;
use crate::core::audio::{BgmOptions, BgmTrack, SoundEffect, SoundOptions};

const FADE_MS: u64 = 2000;

pub(crate) fn tick(state: &mut StarLearn, now: Instant) -> Task<Message> {
    state.audio.tick(now);
    Task::none()
}

pub(crate) fn play_sound(state: &mut StarLearn, effect: SoundEffect) -> Task<Message> {
    state.audio.play_sound(effect, SoundOptions::default());
    Task::none()
}

pub(crate) fn play_bgm(state: &mut StarLearn, track: BgmTrack) -> Task<Message> {
    state.audio.play_bgm(track, BgmOptions::default());
    Task::none()
}

pub(crate) fn stop_bgm(state: &mut StarLearn) -> Task<Message> {
    state.audio.stop_bgm();
    Task::none()
}

pub(crate) fn fade_bgm(state: &mut StarLearn, direction: FadeDirection) -> Task<Message> {
    let target = match direction {
        FadeDirection::Out => 0.0,
        FadeDirection::In => state.config.music_volume,
    };
    state
        .audio
        .fade_bgm(target, Duration::from_millis(FADE_MS));
    Task::none()
}

pub(crate) fn toggle_sound(state: &mut StarLearn) -> Task<Message> {
    let enabled = !state.config.sound_enabled;
    state.config.sound_enabled = enabled;
    state.audio.set_sound_enabled(enabled);
    if enabled {
        state.audio.play_sound(SoundEffect::Pop, SoundOptions::default());
    }
    persist(state);
    Task::none()
}

pub(crate) fn toggle_music(state: &mut StarLearn) -> Task<Message> {
    let enabled = !state.config.music_enabled;
    state.config.music_enabled = enabled;
    // Stops the current track right away when turning off.
    state.audio.set_music_enabled(enabled);
    persist(state);
    Task::none()
}

/// Slider drag; saved on release (`save_settings`).
pub(crate) fn set_effects_volume(state: &mut StarLearn, volume: f32) -> Task<Message> {
    state.audio.set_effects_volume(volume);
    state.config.effects_volume = state.audio.prefs().effects_volume;
    Task::none()
}

pub(crate) fn set_music_volume(state: &mut StarLearn, volume: f32) -> Task<Message> {
    state.audio.set_music_volume(volume);
    state.config.music_volume = state.audio.prefs().music_volume;
    Task::none()
}

pub(crate) fn save_settings(state: &mut StarLearn) -> Task<Message> {
    persist(state);
    Task::none()
}

fn persist(state: &StarLearn) {
    let Some(path) = &state.config_path else {
        return;
    };
    if let Err(e) = config::save_to_path(&state.config, path) {
        tracing::warn!(path = %path.display(), error = %e, "failed to save settings");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::state::test_support;
    use tempfile::tempdir;

    #[tokio::test(start_paused = true)]
    async fn toggles_flip_config_and_controller_together() {
        let mut state = test_support::state();
        assert!(state.config.sound_enabled && state.config.music_enabled);

        let _ = toggle_sound(&mut state);
        let _ = toggle_music(&mut state);

        assert!(!state.config.sound_enabled);
        assert!(!state.config.music_enabled);
        assert!(!state.audio.prefs().sound_enabled);
        assert!(!state.audio.prefs().music_enabled);
    }

    #[tokio::test(start_paused = true)]
    async fn volume_sliders_are_clamped_into_config() {
        let mut state = test_support::state();

        let _ = set_effects_volume(&mut state, 1.7);
        let _ = set_music_volume(&mut state, -0.2);

        assert_eq!(state.config.effects_volume, 1.0);
        assert_eq!(state.config.music_volume, 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn preference_changes_are_saved_when_path_is_set() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        let mut state = test_support::state();
        state.config_path = Some(path.clone());

        let _ = toggle_music(&mut state);

        let saved = config::load_from_path(&path).expect("settings written");
        assert!(!saved.music_enabled);
    }

    #[tokio::test(start_paused = true)]
    async fn volume_drag_is_saved_only_on_release() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        let mut state = test_support::state();
        state.config_path = Some(path.clone());

        for step in [0.55, 0.6, 0.65, 0.7] {
            let _ = set_effects_volume(&mut state, step);
        }
        let _ = set_music_volume(&mut state, 0.2);
        assert!(!path.exists());

        let _ = save_settings(&mut state);
        let saved = config::load_from_path(&path).expect("settings written");
        assert_eq!(saved.effects_volume, 0.7);
        assert_eq!(saved.music_volume, 0.2);
    }

    #[tokio::test(start_paused = true)]
    async fn bgm_without_output_device_is_silently_ignored() {
        let mut state = test_support::state();

        let _ = play_bgm(&mut state, BgmTrack::Learning);
        let _ = fade_bgm(&mut state, FadeDirection::Out);
        let _ = stop_bgm(&mut state);

        assert_eq!(state.audio.current_bgm(), None);
    }
}
