//! Procedural ambience synthesis
//!
//! The whole signal is generated in memory before it is handed to a sink:
//! noise generators feed the scene composers, which mix, clamp, scale and
//! encode their layers into a little-endian i16 byte stream.
//!
//! # Example
//! ```
//! use proc_ambience::audio::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
//!
//! // Raw generators
//! let wind = brown_noise(&mut rng, 4410);
//! let room = pink_noise(&mut rng, 4410);
//! assert_eq!(wind.len(), room.len());
//!
//! // A full scene
//! let params = SceneParams::new(0.1, 0.5).unwrap();
//! let frames = Scene::Rain.compose(&mut rng, &params);
//! assert_eq!(frames.len(), 4410 * 2);
//! ```

mod chirp;
mod export;
mod noise;
mod sink;
mod voice;
pub mod scene;

/// Output sample rate (44.1kHz)
pub const SAMPLE_RATE: u32 = 44100;

/// Peak amplitude of a 16-bit sample
pub const MAX_AMP: f64 = 32767.0;

// Noise generators
pub use noise::{BrownNoise, PinkNoise, brown_noise, pink_noise};

// Synthesized layers
pub use chirp::Chirp;
pub use voice::BabbleVoice;

// Scene composers
pub use scene::{ParamError, Scene, SceneParams, cafe_sound, forest_sound, rain_sound};

// Encoding
pub use export::{decode_pcm_i16, encode_sample, encode_samples, sample_count};

// Sink
pub use sink::{AudioSink, PcmFormat, SinkError};

#[cfg(feature = "wav-export")]
pub use sink::WavSink;
