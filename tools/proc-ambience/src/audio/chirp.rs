//! Bird chirps
//!
//! A chirp is a short sine tone whose frequency glides linearly between two
//! values, shaped by a single half-sine window.

use rand::Rng;
use std::f64::consts::PI;
use std::ops::Range;

/// Samples reserved at the end of the buffer for the longest chirp
pub const CHIRP_HEADROOM: usize = 5000;

/// Chirp length range in samples
const CHIRP_LEN: Range<usize> = 1000..3000;

/// Start frequency range in Hz
const START_FREQ: Range<f64> = 2000.0..4000.0;

/// End frequency offset from the start frequency in Hz
const FREQ_OFFSET: Range<f64> = -500.0..500.0;

/// Peak amplitude of a single chirp
const CHIRP_GAIN: f64 = 0.3;

/// A single linear chirp event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chirp {
    /// First sample index in the target buffer
    pub start: usize,
    /// Length in samples
    pub len: usize,
    /// Frequency at the first sample in Hz
    pub start_freq: f64,
    /// Frequency approached at the last sample in Hz
    pub end_freq: f64,
}

impl Chirp {
    /// Pick a random chirp that fits a buffer of `num_samples`
    ///
    /// Returns `None` when the buffer is too short to leave the headroom
    /// needed by the longest chirp.
    pub fn random<R: Rng>(rng: &mut R, num_samples: usize) -> Option<Self> {
        if num_samples <= CHIRP_HEADROOM {
            return None;
        }

        let start = rng.random_range(0..num_samples - CHIRP_HEADROOM);
        let len = rng.random_range(CHIRP_LEN);
        let start_freq = rng.random_range(START_FREQ);
        let end_freq = start_freq + rng.random_range(FREQ_OFFSET);

        Some(Self {
            start,
            len,
            start_freq,
            end_freq,
        })
    }

    /// Half-sine amplitude window at offset `i` of a chirp of length `len`
    ///
    /// Zero at both ends, peaking at `len / 2`.
    pub fn envelope(i: usize, len: usize) -> f64 {
        if len == 0 {
            return 0.0;
        }
        (PI * (i as f64 / len as f64)).sin()
    }

    /// Instantaneous frequency at offset `i`
    pub fn frequency_at(&self, i: usize) -> f64 {
        let progress = i as f64 / self.len as f64;
        self.start_freq + (self.end_freq - self.start_freq) * progress
    }

    /// Add this chirp into `buffer`, stopping early at the buffer end
    pub fn render_into(&self, buffer: &mut [f64], sample_rate: u32) {
        for i in 0..self.len {
            let Some(slot) = buffer.get_mut(self.start + i) else {
                break;
            };
            let t = i as f64 / sample_rate as f64;
            let freq = self.frequency_at(i);
            let env = Self::envelope(i, self.len);
            *slot += (2.0 * PI * freq * t).sin() * env * CHIRP_GAIN;
        }
    }
}
