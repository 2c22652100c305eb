//! core/audio/engine.rs
//! Real playback backend (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive while anything plays)
//! - one detached Sink per effect playback (effects are decoded up front)
//! - the music Sink, handed to the controller as the track handle
//!   (music is streamed, decoded on the mixer thread)
//!
//! If no output device is available the backend still constructs; every
//! call then fails with `OutputUnavailable` and the controller drops it.

use std::path::Path;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::AudioBackend;
use super::decoder::{decode_file, open_stream};
use crate::error::AudioError;

pub struct RodioBackend {
    // Keep this alive for the lifetime of the backend!
    stream: Option<OutputStream>,
}

impl RodioBackend {
    /// Opens the default output device.
    pub fn open_default() -> Self {
        match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => {
                tracing::info!("audio output opened");
                Self {
                    stream: Some(stream),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "no audio output; sounds disabled");
                Self { stream: None }
            }
        }
    }

    /// A backend with no device; every call fails (and gets dropped).
    #[cfg(test)]
    pub(crate) fn without_output() -> Self {
        Self { stream: None }
    }

    fn new_sink(&self) -> Result<Sink, AudioError> {
        let stream = self
            .stream
            .as_ref()
            .ok_or_else(|| AudioError::OutputUnavailable("no default device".into()))?;
        // rodio 0.21.x: Sink is created from the stream's mixer
        Ok(Sink::connect_new(stream.mixer()))
    }
}

impl AudioBackend for RodioBackend {
    type Sound = SamplesBuffer;
    type Track = Sink;

    fn load(&mut self, path: &Path) -> Result<Self::Sound, AudioError> {
        let audio = decode_file(path)?;
        tracing::debug!(
            path = %path.display(),
            frames = audio.frames(),
            rate = audio.sample_rate,
            "sound loaded"
        );
        Ok(audio.into_source())
    }

    fn play(&mut self, sound: &Self::Sound, volume: f32, rate: f32) -> Result<(), AudioError> {
        let sink = self.new_sink()?;
        sink.set_volume(volume);
        sink.set_speed(rate);
        sink.append(sound.clone());
        // Plays to the end on the mixer thread.
        sink.detach();
        Ok(())
    }

    fn start_music(
        &mut self,
        path: &Path,
        volume: f32,
        looped: bool,
    ) -> Result<Self::Track, AudioError> {
        let sink = self.new_sink()?;
        let stream = open_stream(path, looped)?;

        sink.set_volume(volume);
        sink.append(stream);
        sink.play();

        Ok(sink)
    }

    fn set_music_volume(&mut self, track: &Self::Track, volume: f32) {
        track.set_volume(volume);
    }

    fn stop_music(&mut self, track: Self::Track) {
        track.stop();
    }
}
