//! Forest: brown noise wind with bird chirps

use super::{SceneParams, finish};
use crate::audio::SAMPLE_RATE;
use crate::audio::chirp::Chirp;
use crate::audio::noise::brown_noise;
use rand::Rng;

/// Average chirps per second
const CHIRPS_PER_SECOND: f64 = 2.0;

/// Wind level in the final mix
const WIND_LEVEL: f64 = 0.8;

/// Bird level in the final mix
const BIRD_LEVEL: f64 = 0.4;

/// Generate the forest scene as little-endian i16 frames
///
/// Buffers too short to hold a chirp (5000 samples or fewer) get wind only.
pub fn forest_sound<R: Rng>(rng: &mut R, params: &SceneParams) -> Vec<u8> {
    let num_samples = params.num_samples();
    let num_chirps = (params.duration() * CHIRPS_PER_SECOND).round() as usize;
    tracing::debug!(num_samples, num_chirps, "composing forest");

    let wind = brown_noise(rng, num_samples);
    let mut birds = vec![0.0; num_samples];
    for _ in 0..num_chirps {
        let Some(chirp) = Chirp::random(rng, num_samples) else {
            tracing::debug!(num_samples, "buffer too short for chirps, skipping birds");
            break;
        };
        chirp.render_into(&mut birds, SAMPLE_RATE);
    }

    mix_forest(&wind, &birds, params.volume())
}

/// Mix wind and bird layers into encoded forest frames
///
/// `volume` is expected within 0.0..=1.0. Louder gains saturate at full scale.
pub fn mix_forest(wind: &[f64], birds: &[f64], volume: f64) -> Vec<u8> {
    debug_assert_eq!(wind.len(), birds.len());
    let mixed = wind
        .iter()
        .zip(birds)
        .map(|(&w, &b)| w * WIND_LEVEL + b * BIRD_LEVEL);
    finish(mixed, volume)
}
