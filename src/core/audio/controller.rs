//! core/audio/controller.rs
//! The audio API the GUI calls.
//!
//! - `play_sound`: gated by `sound_enabled`, effects cached on first use
//! - `play_bgm` / `stop_bgm`: at most one music track at a time
//! - `fade_bgm`: linear volume ramp, advanced by `tick(now)`
//! - turning music off stops the current track immediately
//!
//! Every backend failure is logged at debug level and dropped.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::cache::SoundCache;
use super::{AudioBackend, BgmOptions, BgmTrack, SoundEffect, SoundOptions};
use crate::config::{Config, MAX_RATE, MAX_VOLUME, MIN_RATE, MIN_VOLUME};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioPrefs {
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub effects_volume: f32,
    pub music_volume: f32,
}

impl From<&Config> for AudioPrefs {
    fn from(config: &Config) -> Self {
        Self {
            sound_enabled: config.sound_enabled,
            music_enabled: config.music_enabled,
            effects_volume: config.effects_volume,
            music_volume: config.music_volume,
        }
    }
}

/// A linear volume ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
    pub duration: Duration,
}

impl Fade {
    pub fn volume_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * t
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

struct ActiveBgm<T> {
    track: BgmTrack,
    handle: T,
    volume: f32,
    fade: Option<Fade>,
}

pub struct AudioController<B: AudioBackend> {
    backend: B,
    cache: SoundCache<B::Sound>,
    assets_dir: PathBuf,
    prefs: AudioPrefs,
    bgm: Option<ActiveBgm<B::Track>>,
}

fn clamp_volume(v: f32) -> f32 {
    v.clamp(MIN_VOLUME, MAX_VOLUME)
}

impl<B: AudioBackend> AudioController<B> {
    pub fn new(backend: B, prefs: AudioPrefs, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            cache: SoundCache::new(),
            assets_dir: assets_dir.into(),
            prefs,
            bgm: None,
        }
    }

    pub fn play_sound(&mut self, effect: SoundEffect, options: SoundOptions) {
        if !self.prefs.sound_enabled {
            return;
        }

        let path = effect.path_in(&self.assets_dir);
        let backend = &mut self.backend;
        let sound = match self.cache.get_or_load(effect, |_| backend.load(&path)) {
            Ok(sound) => sound,
            Err(e) => {
                tracing::debug!(effect = effect.name(), error = %e, "sound load failed");
                return;
            }
        };

        let volume = clamp_volume(options.volume.unwrap_or(self.prefs.effects_volume));
        let rate = options.rate.unwrap_or(1.0).clamp(MIN_RATE, MAX_RATE);

        if let Err(e) = self.backend.play(&sound, volume, rate) {
            tracing::debug!(effect = effect.name(), error = %e, "sound playback failed");
        }
    }

    pub fn play_bgm(&mut self, track: BgmTrack, options: BgmOptions) {
        if !self.prefs.music_enabled {
            return;
        }

        // Only one background track at a time.
        self.stop_bgm();

        let path = track.path_in(&self.assets_dir);
        let volume = clamp_volume(options.volume.unwrap_or(self.prefs.music_volume));
        let looped = options.looped.unwrap_or(true);

        match self.backend.start_music(&path, volume, looped) {
            Ok(handle) => {
                tracing::debug!(track = track.name(), volume, looped, "bgm started");
                self.bgm = Some(ActiveBgm {
                    track,
                    handle,
                    volume,
                    fade: None,
                });
            }
            Err(e) => {
                tracing::debug!(track = track.name(), error = %e, "bgm start failed");
            }
        }
    }

    pub fn stop_bgm(&mut self) {
        if let Some(active) = self.bgm.take() {
            tracing::debug!(track = active.track.name(), "bgm stopped");
            self.backend.stop_music(active.handle);
        }
    }

    /// Ramps the current track's volume to `target` over `duration`.
    pub fn fade_bgm(&mut self, target: f32, duration: Duration) {
        self.fade_bgm_from(target, duration, Instant::now());
    }

    pub fn fade_bgm_from(&mut self, target: f32, duration: Duration, now: Instant) {
        let Some(active) = self.bgm.as_mut() else {
            return;
        };

        let target = clamp_volume(target);
        if duration.is_zero() {
            active.fade = None;
            active.volume = target;
            self.backend.set_music_volume(&active.handle, target);
            return;
        }

        active.fade = Some(Fade {
            from: active.volume,
            to: target,
            started: now,
            duration,
        });
    }

    /// Advances any running fade.
    pub fn tick(&mut self, now: Instant) {
        let Some(active) = self.bgm.as_mut() else {
            return;
        };
        let Some(fade) = active.fade else {
            return;
        };

        let volume = fade.volume_at(now);
        active.volume = volume;
        self.backend.set_music_volume(&active.handle, volume);

        if fade.is_done(now) {
            active.fade = None;
        }
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.prefs.sound_enabled = enabled;
    }

    /// Turning music off stops whatever is playing right now.
    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.prefs.music_enabled = enabled;
        if !enabled {
            self.stop_bgm();
        }
    }

    pub fn set_effects_volume(&mut self, volume: f32) {
        self.prefs.effects_volume = clamp_volume(volume);
    }

    /// Also applies to the current track, cancelling any fade.
    pub fn set_music_volume(&mut self, volume: f32) {
        let volume = clamp_volume(volume);
        self.prefs.music_volume = volume;

        if let Some(active) = self.bgm.as_mut() {
            active.fade = None;
            active.volume = volume;
            self.backend.set_music_volume(&active.handle, volume);
        }
    }

    pub fn prefs(&self) -> AudioPrefs {
        self.prefs
    }

    pub fn current_bgm(&self) -> Option<BgmTrack> {
        self.bgm.as_ref().map(|a| a.track)
    }

    pub fn bgm_volume(&self) -> Option<f32> {
        self.bgm.as_ref().map(|a| a.volume)
    }

    pub fn is_fading(&self) -> bool {
        self.bgm.as_ref().is_some_and(|a| a.fade.is_some())
    }

    #[cfg(test)]
    pub fn cached_sounds(&self) -> usize {
        self.cache.len()
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}
