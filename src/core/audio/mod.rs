//! core/audio/mod.rs
//! Sound effects + background music.
//!
//! Layers (leaf-first):
//! - `decoder`: Symphonia decoding (whole-file for effects, streamed for music)
//! - `engine`: `RodioBackend`, the real output device (rodio owner)
//! - `cache`: effect -> loaded sound, filled on first use
//! - `controller`: what the GUI calls; applies the user's sound/music prefs
//!
//! The controller only talks to the `AudioBackend` trait, so tests can swap
//! in a recording stub. No Iced imports.

mod cache;
mod controller;
mod decoder;
mod engine;

use std::path::{Path, PathBuf};

use crate::error::AudioError;

pub use controller::{AudioController, AudioPrefs};
pub use engine::RodioBackend;

/// The fixed catalogue of short UI sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Click,
    Success,
    Error,
    LevelUp,
    Achievement,
    Star,
    Coin,
    Whoosh,
    Pop,
    Notification,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 10] = [
        SoundEffect::Click,
        SoundEffect::Success,
        SoundEffect::Error,
        SoundEffect::LevelUp,
        SoundEffect::Achievement,
        SoundEffect::Star,
        SoundEffect::Coin,
        SoundEffect::Whoosh,
        SoundEffect::Pop,
        SoundEffect::Notification,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Click => "click",
            SoundEffect::Success => "success",
            SoundEffect::Error => "error",
            SoundEffect::LevelUp => "level-up",
            SoundEffect::Achievement => "achievement",
            SoundEffect::Star => "star",
            SoundEffect::Coin => "coin",
            SoundEffect::Whoosh => "whoosh",
            SoundEffect::Pop => "pop",
            SoundEffect::Notification => "notification",
        }
    }

    /// `<assets>/sounds/<name>.ogg`
    pub fn path_in(self, assets_dir: &Path) -> PathBuf {
        assets_dir.join("sounds").join(format!("{}.ogg", self.name()))
    }
}

/// Background music tracks. At most one plays at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BgmTrack {
    Menu,
    Learning,
    Celebration,
}

impl BgmTrack {
    pub const ALL: [BgmTrack; 3] = [BgmTrack::Menu, BgmTrack::Learning, BgmTrack::Celebration];

    pub fn name(self) -> &'static str {
        match self {
            BgmTrack::Menu => "menu",
            BgmTrack::Learning => "learning",
            BgmTrack::Celebration => "celebration",
        }
    }

    /// `<assets>/music/<name>.ogg`
    pub fn path_in(self, assets_dir: &Path) -> PathBuf {
        assets_dir.join("music").join(format!("{}.ogg", self.name()))
    }
}

/// Per-call overrides for `play_sound`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SoundOptions {
    pub volume: Option<f32>,
    pub rate: Option<f32>,
}

/// Per-call overrides for `play_bgm`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BgmOptions {
    pub volume: Option<f32>,
    pub looped: Option<bool>,
}

/// The playback primitive the controller drives.
pub trait AudioBackend {
    /// A loaded, replayable effect.
    type Sound: Clone;
    /// The running music track.
    type Track;

    fn load(&mut self, path: &Path) -> Result<Self::Sound, AudioError>;

    /// Fire-and-forget playback of a loaded sound.
    fn play(&mut self, sound: &Self::Sound, volume: f32, rate: f32) -> Result<(), AudioError>;

    fn start_music(
        &mut self,
        path: &Path,
        volume: f32,
        looped: bool,
    ) -> Result<Self::Track, AudioError>;

    fn set_music_volume(&mut self, track: &Self::Track, volume: f32);

    fn stop_music(&mut self, track: Self::Track);
}
