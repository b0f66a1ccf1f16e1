//! Procedural ambient soundscape generation
//!
//! Synthesizes short ambience loops (rain, forest, cafe) entirely offline from
//! procedural noise generators, tonal layers and transient chirps, then encodes
//! them as 16-bit PCM for an audio sink.
//!
//! # Example
//! ```no_run
//! use proc_ambience::audio::*;
//!
//! let mut rng = rand::rng();
//! let params = SceneParams::new(5.0, 0.5)?;
//!
//! // Compose a scene into little-endian i16 frames
//! let frames = Scene::Rain.compose(&mut rng, &params);
//!
//! // Persist it (requires wav-export feature)
//! #[cfg(feature = "wav-export")]
//! WavSink.write(std::path::Path::new("rain.wav"), PcmFormat::AMBIENCE, &frames)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audio;
