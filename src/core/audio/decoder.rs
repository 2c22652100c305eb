//! core/audio/decoder.rs
//! Audio decoding (Symphonia).
//!
//! Two paths over the same packet loop:
//! - `decode_file`: whole file into memory. For effects, which are short and
//!   replayed often.
//! - `open_stream`: a rodio `Source` that decodes packet by packet on the
//!   mixer thread. For music, so starting a track only costs the probe.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use rodio::Source;
use rodio::buffer::SamplesBuffer;
use symphonia::core::audio::{SampleBuffer, SignalSpec};
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader, SeekMode, SeekTo};
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AudioError;

/// Fully decoded audio.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub sample_rate: u32,
    pub channels: u16,
    /// Interleaved samples.
    pub samples: Vec<f32>,
}

impl DecodedAudio {
    /// Hands the samples to rodio. The buffer is cheap to clone afterwards.
    pub fn into_source(self) -> SamplesBuffer {
        SamplesBuffer::new(self.channels, self.sample_rate, self.samples)
    }

    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / usize::from(self.channels)
    }
}

/// An opened track: container reader + codec, positioned at the next packet.
struct Packets {
    format: Box<dyn FormatReader>,
    decoder: Box<dyn Decoder>,
    track_id: u32,
    sample_rate: u32,
    channels: u16,
}

impl Packets {
    fn open(path: &Path) -> Result<Self, AudioError> {
        let file = File::open(path).map_err(|e| AudioError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::Probe(e.to_string()))?;

        let format = probed.format;

        let track = format.default_track().ok_or(AudioError::NoTrack)?;
        let track_id = track.id;
        let codec_params = track.codec_params.clone();

        let decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Decode(e.to_string()))?;

        Ok(Self {
            format,
            decoder,
            track_id,
            sample_rate: codec_params.sample_rate.unwrap_or(44_100),
            channels: codec_params
                .channels
                .map(|c| c.count() as u16)
                .unwrap_or(2),
        })
    }

    /// Decodes the next packet of our track and appends its interleaved
    /// samples to `out`. `Ok(false)` at end of stream.
    fn decode_next(&mut self, out: &mut Vec<f32>) -> Result<bool, AudioError> {
        loop {
            let packet = match self.format.next_packet() {
                Ok(p) => p,
                // End of stream.
                Err(SymphoniaError::IoError(_)) => return Ok(false),
                Err(SymphoniaError::ResetRequired) => {
                    self.decoder.reset();
                    continue;
                }
                Err(e) => return Err(AudioError::Decode(e.to_string())),
            };

            if packet.track_id() != self.track_id {
                continue;
            }

            let decoded = match self.decoder.decode(&packet) {
                Ok(d) => d,
                Err(SymphoniaError::IoError(_)) => return Ok(false),
                // Corrupt packet; skip.
                Err(SymphoniaError::DecodeError(_)) => continue,
                Err(SymphoniaError::ResetRequired) => {
                    self.decoder.reset();
                    continue;
                }
                Err(e) => return Err(AudioError::Decode(e.to_string())),
            };

            let spec = SignalSpec::new(decoded.spec().rate, decoded.spec().channels);
            self.sample_rate = spec.rate;
            self.channels = spec.channels.count() as u16;

            let frames = decoded.frames();
            let mut sbuf = SampleBuffer::<f32>::new(frames as u64, spec);
            sbuf.copy_interleaved_ref(decoded);
            out.extend_from_slice(sbuf.samples());
            return Ok(true);
        }
    }

    /// Back to the first packet.
    fn rewind(&mut self) -> Result<(), AudioError> {
        self.format
            .seek(
                SeekMode::Coarse,
                SeekTo::TimeStamp {
                    ts: 0,
                    track_id: self.track_id,
                },
            )
            .map_err(|e| AudioError::Decode(e.to_string()))?;
        self.decoder.reset();
        Ok(())
    }
}

pub fn decode_file(path: &Path) -> Result<DecodedAudio, AudioError> {
    let mut packets = Packets::open(path)?;
    let mut samples = Vec::new();

    while packets.decode_next(&mut samples)? {}

    if samples.is_empty() {
        return Err(AudioError::Decode("no samples decoded".into()));
    }

    Ok(DecodedAudio {
        sample_rate: packets.sample_rate,
        channels: packets.channels,
        samples,
    })
}

/// Opens `path` for streaming playback.
///
/// Decodes the first packet up front, so a file that opens but has no
/// audio fails here rather than silently on the mixer thread.
pub fn open_stream(path: &Path, looped: bool) -> Result<MusicStream, AudioError> {
    let mut packets = Packets::open(path)?;
    let mut buf = Vec::new();

    while packets.decode_next(&mut buf)? {
        if !buf.is_empty() {
            break;
        }
    }
    if buf.is_empty() {
        return Err(AudioError::Decode("no samples decoded".into()));
    }

    Ok(MusicStream {
        packets,
        looped,
        buf,
        pos: 0,
        ended: false,
    })
}

/// A streaming rodio Source backed by Symphonia. Loops by seeking back to
/// the start when `looped` is set.
pub struct MusicStream {
    packets: Packets,
    looped: bool,

    // Interleaved f32 samples ready to be yielded
    buf: Vec<f32>,
    pos: usize,

    ended: bool,
}

impl MusicStream {
    fn refill(&mut self) {
        self.buf.clear();
        self.pos = 0;

        // One rewind per refill; a pass with no audio ends the stream.
        let mut rewound = false;
        while !self.ended {
            match self.packets.decode_next(&mut self.buf) {
                Ok(true) if !self.buf.is_empty() => return,
                Ok(true) => continue,
                Ok(false) if self.looped && !rewound => {
                    rewound = true;
                    if let Err(e) = self.packets.rewind() {
                        tracing::debug!(error = %e, "music loop rewind failed");
                        self.ended = true;
                    }
                }
                Ok(false) => self.ended = true,
                Err(e) => {
                    tracing::debug!(error = %e, "music stream stopped");
                    self.ended = true;
                }
            }
        }
    }
}

impl Iterator for MusicStream {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.buf.len() {
            if self.ended {
                return None;
            }
            self.refill();
        }

        let s = self.buf.get(self.pos).copied();
        self.pos += 1;
        s
    }
}

impl Source for MusicStream {
    // rodio 0.21 uses current_span_len (not current_frame_len).
    fn current_span_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        self.packets.channels
    }

    fn sample_rate(&self) -> u32 {
        self.packets.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    /// Minimal 16-bit PCM WAV.
    fn write_wav(path: &Path, sample_rate: u32, channels: u16, frames: usize) {
        let bytes_per_frame = 2 * u32::from(channels);
        let data_len = frames as u32 * bytes_per_frame;

        let mut buf: Vec<u8> = Vec::new();
        buf.extend_from_slice(b"RIFF");
        buf.extend_from_slice(&(36 + data_len).to_le_bytes());
        buf.extend_from_slice(b"WAVE");
        buf.extend_from_slice(b"fmt ");
        buf.extend_from_slice(&16u32.to_le_bytes());
        buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
        buf.extend_from_slice(&channels.to_le_bytes());
        buf.extend_from_slice(&sample_rate.to_le_bytes());
        buf.extend_from_slice(&(sample_rate * bytes_per_frame).to_le_bytes());
        buf.extend_from_slice(&(bytes_per_frame as u16).to_le_bytes());
        buf.extend_from_slice(&16u16.to_le_bytes());
        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&data_len.to_le_bytes());
        for i in 0..frames * usize::from(channels) {
            let s: i16 = if i % 2 == 0 { 1000 } else { -1000 };
            buf.extend_from_slice(&s.to_le_bytes());
        }

        let mut f = File::create(path).expect("create wav");
        f.write_all(&buf).expect("write wav");
    }

    #[test]
    fn decodes_pcm_wav_into_interleaved_samples() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("click.wav");
        write_wav(&path, 8000, 2, 400);

        let audio = decode_file(&path).expect("decode");
        assert_eq!(audio.sample_rate, 8000);
        assert_eq!(audio.channels, 2);
        assert_eq!(audio.frames(), 400);
        assert!(audio.samples.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn stream_yields_every_sample_once() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("menu.wav");
        write_wav(&path, 8000, 2, 3000);

        let stream = open_stream(&path, false).expect("open stream");
        assert_eq!(stream.channels(), 2);
        assert_eq!(stream.sample_rate(), 8000);
        assert_eq!(stream.count(), 6000);
    }

    #[test]
    fn looped_stream_starts_over_at_the_end() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("learning.wav");
        write_wav(&path, 8000, 1, 500);

        let stream = open_stream(&path, true).expect("open stream");
        let samples: Vec<f32> = stream.take(1500).collect();

        assert_eq!(samples.len(), 1500);
        assert_eq!(samples[..500], samples[500..1000]);
    }

    #[test]
    fn stream_open_reports_bad_files_up_front() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("junk.ogg");
        std::fs::write(&path, b"definitely not audio").expect("write");

        assert!(matches!(
            open_stream(&path, true),
            Err(AudioError::Probe(_))
        ));
        assert!(matches!(
            open_stream(&dir.path().join("absent.ogg"), true),
            Err(AudioError::Open { .. })
        ));
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempdir().expect("tempdir");
        let err = decode_file(&dir.path().join("nope.ogg")).unwrap_err();
        assert!(matches!(err, AudioError::Open { .. }));
    }

    #[test]
    fn garbage_file_fails_probe() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("junk.ogg");
        std::fs::write(&path, b"definitely not audio").expect("write");

        let err = decode_file(&path).unwrap_err();
        assert!(matches!(err, AudioError::Probe(_)));
    }
}
