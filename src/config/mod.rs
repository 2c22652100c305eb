//! config/mod.rs
//! User preferences, loaded from and saved to `settings.toml`.
//!
//! Missing file -> defaults. Unparseable file -> defaults (logged).
//! Missing keys -> per-field defaults, so older files keep working.

pub mod defaults;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "StarLearn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub effects_volume: f32,
    pub music_volume: f32,
    pub assets_dir: PathBuf,
    pub login_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sound_enabled: DEFAULT_SOUND_ENABLED,
            music_enabled: DEFAULT_MUSIC_ENABLED,
            effects_volume: DEFAULT_EFFECTS_VOLUME,
            music_volume: DEFAULT_MUSIC_VOLUME,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
        }
    }
}

impl Config {
    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    /// Clamp values a hand-edited file might get wrong.
    /// `nan` / `inf` are valid TOML floats; those fall back to the defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.effects_volume = sanitize_volume(self.effects_volume, DEFAULT_EFFECTS_VOLUME);
        self.music_volume = sanitize_volume(self.music_volume, DEFAULT_MUSIC_VOLUME);
        self
    }
}

fn sanitize_volume(value: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_VOLUME, MAX_VOLUME)
    } else {
        default
    }
}

/// `<platform config dir>/StarLearn/settings.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config.sanitized()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            sound_enabled: false,
            music_enabled: true,
            effects_volume: 0.9,
            music_volume: 0.1,
            assets_dir: PathBuf::from("/opt/starlearn/assets"),
            login_delay_ms: 10,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "music_enabled = false\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(!loaded.music_enabled);
        assert_eq!(loaded.sound_enabled, DEFAULT_SOUND_ENABLED);
        assert_eq!(loaded.login_delay_ms, DEFAULT_LOGIN_DELAY_MS);
    }

    #[test]
    fn out_of_range_volumes_are_clamped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "effects_volume = 3.0\nmusic_volume = -1.0\n")
            .expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.effects_volume, MAX_VOLUME);
        assert_eq!(loaded.music_volume, MIN_VOLUME);
    }

    #[test]
    fn non_finite_volumes_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "effects_volume = nan\nmusic_volume = inf\n")
            .expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.effects_volume, DEFAULT_EFFECTS_VOLUME);
        assert_eq!(loaded.music_volume, DEFAULT_MUSIC_VOLUME);
    }

    #[test]
    fn load_missing_file_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
