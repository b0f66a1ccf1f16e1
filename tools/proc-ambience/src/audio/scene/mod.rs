//! Scene composers
//!
//! Each scene combines noise beds with synthesized layers into one waveform,
//! then runs the shared output stage: clamp to -1.0..=1.0, scale by volume
//! and encode as little-endian i16.

mod cafe;
mod forest;
mod rain;

pub use cafe::{NUM_VOICES, cafe_sound, mix_cafe};
pub use forest::{forest_sound, mix_forest};
pub use rain::{mix_rain, rain_sound};

use super::export::{encode_sample, sample_count};
use rand::Rng;
use std::fmt;

/// Invalid scene parameters
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// Duration is negative, NaN or infinite
    #[error("invalid duration {0}s (must be finite and >= 0)")]
    InvalidDuration(f64),

    /// Volume outside 0.0..=1.0
    #[error("volume {0} out of range (must be 0.0-1.0)")]
    VolumeOutOfRange(f64),
}

/// Duration and volume of a scene pass
///
/// Only constructible through [`SceneParams::new`], so a value in hand has
/// always passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    duration: f64,
    volume: f64,
}

impl SceneParams {
    /// Create validated scene parameters
    pub fn new(duration: f64, volume: f64) -> Result<Self, ParamError> {
        let params = Self { duration, volume };
        params.validate()?;
        Ok(params)
    }

    /// Check that the parameters keep every encoded sample in range
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(ParamError::InvalidDuration(self.duration));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ParamError::VolumeOutOfRange(self.volume));
        }
        Ok(())
    }

    /// Length in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Linear gain applied after clipping
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Number of samples the scene produces
    pub fn num_samples(&self) -> usize {
        sample_count(self.duration)
    }
}

/// The available ambience scenes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// Pink noise downpour
    Rain,
    /// Brown noise wind with bird chirps
    Forest,
    /// Pink room tone under a babble of voices
    Cafe,
}

impl Scene {
    /// All scenes in generation order
    pub const ALL: [Scene; 3] = [Scene::Rain, Scene::Forest, Scene::Cafe];

    /// Lowercase scene name
    pub fn name(self) -> &'static str {
        match self {
            Scene::Rain => "rain",
            Scene::Forest => "forest",
            Scene::Cafe => "cafe",
        }
    }

    /// Output file name for this scene
    pub fn file_name(self) -> String {
        format!("{}.wav", self.name())
    }

    /// Look up a scene by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scene| scene.name().eq_ignore_ascii_case(name))
    }

    /// Volume the composer uses when none is given
    pub fn default_volume(self) -> f64 {
        match self {
            Scene::Forest => 0.4,
            Scene::Rain | Scene::Cafe => 0.5,
        }
    }

    /// Compose this scene into an encoded i16 byte stream
    pub fn compose<R: Rng>(self, rng: &mut R, params: &SceneParams) -> Vec<u8> {
        match self {
            Scene::Rain => rain_sound(rng, params),
            Scene::Forest => forest_sound(rng, params),
            Scene::Cafe => cafe_sound(rng, params),
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared output stage: clamp, apply volume, encode
///
/// Volumes outside 0.0..=1.0 saturate instead of wrapping. A NaN volume
/// encodes silence.
fn finish(mixed: impl ExactSizeIterator<Item = f64>, volume: f64) -> Vec<u8> {
    let volume = if volume.is_nan() { 0.0 } else { volume };
    let mut bytes = Vec::with_capacity(mixed.len() * 2);
    for sample in mixed {
        let val = (sample.clamp(-1.0, 1.0) * volume).clamp(-1.0, 1.0);
        bytes.extend_from_slice(&encode_sample(val));
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{SAMPLE_RATE, decode_pcm_i16};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_params_validation() {
        assert!(SceneParams::new(5.0, 0.5).is_ok());
        assert!(SceneParams::new(0.0, 0.0).is_ok());
        assert!(SceneParams::new(1.0, 1.0).is_ok());

        assert_eq!(
            SceneParams::new(-1.0, 0.5),
            Err(ParamError::InvalidDuration(-1.0))
        );
        assert!(matches!(
            SceneParams::new(f64::NAN, 0.5),
            Err(ParamError::InvalidDuration(_))
        ));
        assert!(matches!(
            SceneParams::new(f64::INFINITY, 0.5),
            Err(ParamError::InvalidDuration(_))
        ));
        assert_eq!(
            SceneParams::new(1.0, 1.5),
            Err(ParamError::VolumeOutOfRange(1.5))
        );
        assert_eq!(
            SceneParams::new(1.0, -0.1),
            Err(ParamError::VolumeOutOfRange(-0.1))
        );
    }

    #[test]
    fn test_num_samples_truncates() {
        let params = SceneParams::new(0.5, 0.5).unwrap();
        assert_eq!(params.num_samples(), 22050);
        // 0.00001s is less than one sample period
        let params = SceneParams::new(1.00001, 0.5).unwrap();
        assert_eq!(params.num_samples(), 44100);
    }

    #[test]
    fn test_scene_names() {
        assert_eq!(Scene::Rain.file_name(), "rain.wav");
        assert_eq!(Scene::Forest.file_name(), "forest.wav");
        assert_eq!(Scene::Cafe.file_name(), "cafe.wav");
        assert_eq!(Scene::from_name("FOREST"), Some(Scene::Forest));
        assert_eq!(Scene::from_name("fireplace"), None);
        assert_eq!(Scene::Cafe.to_string(), "cafe");
    }

    #[test]
    fn test_default_volumes() {
        assert_eq!(Scene::Rain.default_volume(), 0.5);
        assert_eq!(Scene::Forest.default_volume(), 0.4);
        assert_eq!(Scene::Cafe.default_volume(), 0.5);
    }

    #[test]
    fn test_finish_clamps_before_volume() {
        let bytes = finish([2.0, -2.0, 0.5].into_iter(), 0.5);
        let pcm = decode_pcm_i16(&bytes);
        assert_eq!(pcm, vec![16383, -16383, 8191]);
    }

    #[test]
    fn test_finish_saturates_loud_volume() {
        let pcm = decode_pcm_i16(&finish([0.5, -0.9, 2.0, 0.1].into_iter(), 3.0));
        assert_eq!(pcm, vec![32767, -32767, 32767, 9830]);
    }

    #[test]
    fn test_finish_nan_volume_is_silent() {
        let pcm = decode_pcm_i16(&finish([0.5, -1.0].into_iter(), f64::NAN));
        assert_eq!(pcm, vec![0, 0]);
    }

    #[test]
    fn test_unvalidated_volume_stays_in_range() {
        // Built in-module, bypassing SceneParams::new
        let loud = SceneParams {
            duration: 0.01,
            volume: 3.0,
        };
        assert!(loud.validate().is_err());
        let mut rng = Pcg32::seed_from_u64(1);
        for scene in Scene::ALL {
            let pcm = decode_pcm_i16(&scene.compose(&mut rng, &loud));
            assert_eq!(pcm.len(), loud.num_samples());
            assert!(pcm.iter().all(|&s| (-32767..=32767).contains(&s)));
        }
    }

    #[test]
    fn test_accessors() {
        let params = SceneParams::new(2.5, 0.4).unwrap();
        assert_eq!(params.duration(), 2.5);
        assert_eq!(params.volume(), 0.4);
    }

    #[test]
    fn test_every_scene_has_exact_length() {
        let mut rng = Pcg32::seed_from_u64(5);
        let params = SceneParams::new(0.2, 0.5).unwrap();
        for scene in Scene::ALL {
            let frames = scene.compose(&mut rng, &params);
            assert_eq!(
                frames.len(),
                (0.2 * SAMPLE_RATE as f64) as usize * 2,
                "{scene} has the wrong length"
            );
        }
    }

    #[test]
    fn test_every_scene_respects_volume() {
        let mut rng = Pcg32::seed_from_u64(6);
        let params = SceneParams::new(0.2, 0.25).unwrap();
        let limit = (0.25 * 32767.0) as i16;
        for scene in Scene::ALL {
            let pcm = decode_pcm_i16(&scene.compose(&mut rng, &params));
            assert!(
                pcm.iter().all(|s| s.abs() <= limit),
                "{scene} exceeded its volume"
            );
            assert!(pcm.iter().any(|&s| s != 0), "{scene} is silent");
        }
    }
}
