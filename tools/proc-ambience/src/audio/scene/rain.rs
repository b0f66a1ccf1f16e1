//! Rain: pink noise driven into the clipper

use super::{SceneParams, finish};
use crate::audio::noise::pink_noise;
use rand::Rng;

/// Gain applied to the pink noise before clipping
const RAIN_DRIVE: f64 = 2.0;

/// Generate the rain scene as little-endian i16 frames
pub fn rain_sound<R: Rng>(rng: &mut R, params: &SceneParams) -> Vec<u8> {
    let num_samples = params.num_samples();
    tracing::debug!(num_samples, "composing rain");

    let noise = pink_noise(rng, num_samples);
    mix_rain(&noise, params.volume())
}

/// Mix a pink noise bed into encoded rain frames
///
/// `volume` is expected within 0.0..=1.0. Louder gains saturate at full scale.
pub fn mix_rain(noise: &[f64], volume: f64) -> Vec<u8> {
    finish(noise.iter().map(|&x| x * RAIN_DRIVE), volume)
}
