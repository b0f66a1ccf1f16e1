//! Noise generators
//!
//! Provides the colored noise beds the scenes are built on. Each generator is
//! an explicit state struct so that nothing is shared between scene passes.

use rand::Rng;

/// Number of octave rows in the pink noise generator
const PINK_ROWS: usize = 16;

/// Output normalization for the pink row sum (empirical, keeps the sum usable)
const PINK_SCALE: f64 = 10.0;

/// Amplitude of the white steps fed into the brown integrator
const BROWN_STEP: f64 = 0.1;

/// Leak applied to the brown integrator after every step
const BROWN_LEAK: f64 = 0.99;

/// Pink (1/f) noise using the Voss-McCartney row-sum algorithm
///
/// Sample `i` refreshes the row selected by the lowest set bit of `i`. The
/// hierarchy is truncated to 16 rows: indices whose lowest set bit is at
/// position 16 or above (including `0`) leave every row untouched, while the
/// extra white term is still added.
#[derive(Debug, Clone)]
pub struct PinkNoise {
    rows: [f64; PINK_ROWS],
    running_sum: f64,
    index: u64,
}

impl Default for PinkNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl PinkNoise {
    /// Create a generator with all rows at zero
    pub fn new() -> Self {
        Self {
            rows: [0.0; PINK_ROWS],
            running_sum: 0.0,
            index: 0,
        }
    }

    /// Row refreshed at sample `index`, or `None` past the 16-row cap
    pub fn row_for_index(index: u64) -> Option<usize> {
        let k = index.trailing_zeros() as usize;
        (k < PINK_ROWS).then_some(k)
    }

    /// Generate the next sample
    pub fn next_sample<R: Rng>(&mut self, rng: &mut R) -> f64 {
        if let Some(k) = Self::row_for_index(self.index) {
            let prev = self.rows[k];
            self.rows[k] = rng.random_range(-1.0..=1.0);
            self.running_sum += self.rows[k] - prev;
        }
        self.index += 1;

        // White term fills the gaps between row updates
        let white: f64 = rng.random_range(-1.0..=1.0);
        (self.running_sum + white) / PINK_SCALE
    }
}

/// Brown (1/f²) noise from a leaky integrator
///
/// Each white step is added to the accumulator, which is then scaled by
/// `0.99`. Without the leak the random walk is unbounded and would saturate.
#[derive(Debug, Clone, Default)]
pub struct BrownNoise {
    last: f64,
}

impl BrownNoise {
    /// Create a generator resting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next sample (post-leak value)
    pub fn next_sample<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let white: f64 = rng.random_range(-BROWN_STEP..=BROWN_STEP);
        self.last = (self.last + white) * BROWN_LEAK;
        self.last
    }
}

/// Generate `num_samples` of pink noise
///
/// # Returns
/// Vector of samples in approximately -1.0 to 1.0 range
pub fn pink_noise<R: Rng>(rng: &mut R, num_samples: usize) -> Vec<f64> {
    let mut generator = PinkNoise::new();
    (0..num_samples).map(|_| generator.next_sample(rng)).collect()
}

/// Generate `num_samples` of brown noise
///
/// Samples are produced strictly in order; the integrator carries state
/// from one sample to the next.
pub fn brown_noise<R: Rng>(rng: &mut R, num_samples: usize) -> Vec<f64> {
    let mut generator = BrownNoise::new();
    (0..num_samples).map(|_| generator.next_sample(rng)).collect()
}
