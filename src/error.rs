//! error.rs
//! Error types shared across the app.
//!
//! None of these are shown to the user directly:
//! - config errors are logged and the defaults are used
//! - audio errors are logged at debug level and dropped
//! - auth errors map to one generic, friendly sentence

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Failures from the audio backend.
#[derive(Debug, Clone, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    OutputUnavailable(String),

    #[error("failed to open {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("format probe failed: {0}")]
    Probe(String),

    #[error("no supported audio track found")]
    NoTrack,

    #[error("decode error: {0}")]
    Decode(String),
}

/// Login failure.
///
/// The demo authenticator never returns this; the variant exists so the
/// view has a failure branch to render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Oops! Something went wrong. Please try again.")]
    Generic,
}
