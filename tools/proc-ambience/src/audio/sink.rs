//! Audio sinks
//!
//! A sink persists an encoded i16 byte stream together with its PCM format.
//! The WAV sink renders the complete file in memory before touching the
//! filesystem, so the header always matches the frames that follow it.

use std::path::Path;

#[cfg(feature = "wav-export")]
use std::io::Cursor;
#[cfg(feature = "wav-export")]
use std::path::PathBuf;

use super::SAMPLE_RATE;

/// Errors raised while persisting audio
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "wav-export")]
    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),

    #[error("unsupported sample width {0} bytes (only 2 is supported)")]
    UnsupportedSampleWidth(u16),

    #[error("channel count must be at least 1")]
    ZeroChannels,

    #[error("{len} bytes is not a whole number of {frame}-byte frames")]
    PartialFrame { len: usize, frame: usize },
}

/// Layout of the PCM data handed to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Interleaved channel count
    pub channels: u16,
    /// Bytes per sample
    pub sample_width_bytes: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl PcmFormat {
    /// Mono, 16-bit, 44.1kHz: the format every scene is encoded in
    pub const AMBIENCE: PcmFormat = PcmFormat {
        channels: 1,
        sample_width_bytes: 2,
        sample_rate: SAMPLE_RATE,
    };

    /// Bytes in one frame (one sample per channel)
    pub fn frame_bytes(&self) -> usize {
        self.channels as usize * self.sample_width_bytes as usize
    }

    /// Check the format and that `frames` holds only whole frames
    pub fn validate(&self, frames: &[u8]) -> Result<(), SinkError> {
        if self.channels == 0 {
            return Err(SinkError::ZeroChannels);
        }
        if self.sample_width_bytes != 2 {
            return Err(SinkError::UnsupportedSampleWidth(self.sample_width_bytes));
        }
        let frame = self.frame_bytes();
        if frames.len() % frame != 0 {
            return Err(SinkError::PartialFrame {
                len: frames.len(),
                frame,
            });
        }
        Ok(())
    }

    /// Number of whole frames in `bytes`
    pub fn frame_count(&self, bytes: usize) -> usize {
        match self.frame_bytes() {
            0 => 0,
            frame => bytes / frame,
        }
    }
}

/// Destination for encoded audio
pub trait AudioSink {
    /// Persist `frames` (little-endian i16, interleaved) at `path`
    fn write(&self, path: &Path, format: PcmFormat, frames: &[u8]) -> Result<(), SinkError>;
}

/// Writes RIFF/WAVE files with hound
///
/// The file is encoded into memory, written to `<path>.part`, then renamed
/// into place. On failure the partial file is removed and `path` is left
/// untouched.
#[cfg(feature = "wav-export")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WavSink;

#[cfg(feature = "wav-export")]
impl WavSink {
    /// Encode a complete WAV file into memory
    pub fn encode(format: PcmFormat, frames: &[u8]) -> Result<Vec<u8>, SinkError> {
        use hound::{SampleFormat, WavSpec, WavWriter};

        format.validate(frames)?;

        let spec = WavSpec {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bits_per_sample: format.sample_width_bytes * 8,
            sample_format: SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::with_capacity(44 + frames.len()));
        {
            let mut writer = WavWriter::new(&mut cursor, spec)?;
            for pair in frames.chunks_exact(2) {
                writer.write_sample(i16::from_le_bytes([pair[0], pair[1]]))?;
            }
            writer.finalize()?;
        }
        Ok(cursor.into_inner())
    }

    fn part_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_owned();
        name.push(".part");
        PathBuf::from(name)
    }
}

#[cfg(feature = "wav-export")]
impl AudioSink for WavSink {
    fn write(&self, path: &Path, format: PcmFormat, frames: &[u8]) -> Result<(), SinkError> {
        let bytes = Self::encode(format, frames)?;
        let part = Self::part_path(path);

        let result = std::fs::write(&part, &bytes).and_then(|()| std::fs::rename(&part, path));
        if let Err(e) = result {
            let _ = std::fs::remove_file(&part);
            return Err(e.into());
        }

        tracing::debug!(
            path = %path.display(),
            frames = format.frame_count(frames.len()),
            "wrote WAV file"
        );
        Ok(())
    }
}
