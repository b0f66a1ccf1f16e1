//! Cafe: pink room tone under a babble of modulated voices

use super::{SceneParams, finish};
use crate::audio::SAMPLE_RATE;
use crate::audio::noise::pink_noise;
use crate::audio::voice::{BabbleVoice, time_axis};
use rand::Rng;

/// Number of simulated voices in the babble
pub const NUM_VOICES: usize = 15;

/// Room tone level in the final mix
const ROOM_LEVEL: f64 = 0.1;

/// Generate the cafe scene as little-endian i16 frames
///
/// This is the most expensive composer: every voice renders every sample.
/// The time axis is computed once and shared across voices.
pub fn cafe_sound<R: Rng>(rng: &mut R, params: &SceneParams) -> Vec<u8> {
    let num_samples = params.num_samples();
    tracing::debug!(num_samples, voices = NUM_VOICES, "composing cafe");

    let room = pink_noise(rng, num_samples);

    let times = time_axis(num_samples, SAMPLE_RATE);
    let mut babble = vec![0.0; num_samples];
    for _ in 0..NUM_VOICES {
        let voice = BabbleVoice::random(rng, SAMPLE_RATE);
        voice.render_into(rng, &mut babble, &times);
    }

    mix_cafe(&room, &babble, params.volume())
}

/// Mix room tone and babble into encoded cafe frames
///
/// `volume` is expected within 0.0..=1.0. Louder gains saturate at full scale.
pub fn mix_cafe(room: &[f64], babble: &[f64], volume: f64) -> Vec<u8> {
    debug_assert_eq!(room.len(), babble.len());
    let mixed = room.iter().zip(babble).map(|(&r, &b)| r * ROOM_LEVEL + b);
    finish(mixed, volume)
}
