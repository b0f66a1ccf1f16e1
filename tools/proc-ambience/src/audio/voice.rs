//! Babble voices
//!
//! A voice is a harmonic carrier (fundamental plus its second harmonic)
//! amplitude-modulated at a syllable rate, with random dropouts standing in
//! for pauses between words.

use rand::Rng;
use std::f64::consts::PI;
use std::ops::Range;

/// Fundamental pitch range in Hz
const PITCH: Range<f64> = 150.0..400.0;

/// Syllable rate range in Hz
const SPEECH_RATE: Range<f64> = 2.0..6.0;

/// Per-sample probability of a pause
const PAUSE_PROBABILITY: f64 = 0.01;

/// Level of a single voice in the babble bed
const VOICE_GAIN: f64 = 0.1;

/// A single simulated voice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BabbleVoice {
    /// Fundamental frequency in Hz
    pub pitch: f64,
    /// Modulation (syllable) rate in Hz
    pub speech_rate: f64,
    /// Modulation phase offset in radians
    pub phase_offset: f64,
}

impl BabbleVoice {
    /// Pick a random voice
    ///
    /// The phase offset is a whole number drawn from `0..sample_rate`.
    pub fn random<R: Rng>(rng: &mut R, sample_rate: u32) -> Self {
        let pitch = rng.random_range(PITCH);
        let speech_rate = rng.random_range(SPEECH_RATE);
        let phase_offset = rng.random_range(0..sample_rate.max(1)) as f64;
        Self {
            pitch,
            speech_rate,
            phase_offset,
        }
    }

    /// Harmonic carrier at time `t` seconds
    pub fn carrier(&self, t: f64) -> f64 {
        (2.0 * PI * self.pitch * t).sin() + 0.5 * (2.0 * PI * 2.0 * self.pitch * t).sin()
    }

    /// Syllable envelope at time `t`, mapped to 0.0..=1.0
    pub fn modulation(&self, t: f64) -> f64 {
        ((2.0 * PI * self.speech_rate * t + self.phase_offset).sin() + 1.0) / 2.0
    }

    /// Add this voice into `buffer`
    ///
    /// `times` holds `i / sample_rate` for every index and is shared by all
    /// voices of a scene. Pauses are drawn independently for each sample.
    pub fn render_into<R: Rng>(&self, rng: &mut R, buffer: &mut [f64], times: &[f64]) {
        for (slot, &t) in buffer.iter_mut().zip(times) {
            let mut modulation = self.modulation(t);
            if rng.random_bool(PAUSE_PROBABILITY) {
                modulation = 0.0;
            }
            *slot += self.carrier(t) * modulation * VOICE_GAIN;
        }
    }
}

/// Time axis in seconds for `num_samples` at `sample_rate`
pub(crate) fn time_axis(num_samples: usize, sample_rate: u32) -> Vec<f64> {
    (0..num_samples)
        .map(|i| i as f64 / sample_rate as f64)
        .collect()
}
