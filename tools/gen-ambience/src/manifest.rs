//! ambience.toml manifest parsing
//!
//! Describes which scenes to render, where, and with which parameters.

use anyhow::{Context, Result};
use proc_ambience::audio::{Scene, SceneParams};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default output directory
pub const DEFAULT_OUTPUT: &str = "public/sounds";

/// Default scene length in seconds
pub const DEFAULT_DURATION: f64 = 5.0;

/// Default volume for the built-in run
pub const DEFAULT_VOLUME: f64 = 0.5;

/// ambience.toml manifest structure
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmbienceManifest {
    /// Output directory, relative to the working directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub scenes: Vec<SceneEntry>,
}

/// Single scene entry
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneEntry {
    /// Scene name: rain, forest or cafe
    pub scene: String,

    /// Length in seconds.
    /// Default: 5.0
    #[serde(default = "default_duration")]
    pub duration: f64,

    /// Volume (0.0 to 1.0).
    /// Default: the scene's own default volume
    #[serde(default)]
    pub volume: Option<f64>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

/// A validated unit of work
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Job {
    pub scene: Scene,
    pub params: SceneParams,
}

impl AmbienceManifest {
    /// Load manifest from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse ambience.toml")
    }

    /// Validate every entry and resolve it into a job
    pub fn jobs(&self) -> Result<Vec<Job>> {
        if self.scenes.is_empty() {
            anyhow::bail!("ambience.toml declares no scenes");
        }

        self.scenes
            .iter()
            .enumerate()
            .map(|(i, entry)| -> Result<Job> {
                let scene = Scene::from_name(&entry.scene).with_context(|| {
                    format!(
                        "Unknown scene {:?} in entry {} (expected rain, forest or cafe)",
                        entry.scene, i
                    )
                })?;
                let volume = entry.volume.unwrap_or_else(|| scene.default_volume());
                let params = SceneParams::new(entry.duration, volume)
                    .with_context(|| format!("Invalid parameters for {} in entry {}", scene, i))?;
                Ok(Job { scene, params })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_minimal() {
        let manifest = AmbienceManifest::parse(
            r#"
[[scenes]]
scene = "rain"
"#,
        )
        .unwrap();

        assert_eq!(manifest.output, PathBuf::from("public/sounds"));
        let jobs = manifest.jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].scene, Scene::Rain);
        assert_eq!(jobs[0].params.duration(), 5.0);
        assert_eq!(jobs[0].params.volume(), 0.5);
    }

    #[test]
    fn test_manifest_defaults_to_scene_volume() {
        let manifest = AmbienceManifest::parse(
            r#"
output = "assets/ambience"

[[scenes]]
scene = "forest"
duration = 2.5

[[scenes]]
scene = "Cafe"
duration = 1.0
volume = 0.2
"#,
        )
        .unwrap();

        assert_eq!(manifest.output, PathBuf::from("assets/ambience"));
        let jobs = manifest.jobs().unwrap();
        assert_eq!(jobs[0].scene, Scene::Forest);
        assert_eq!(jobs[0].params.volume(), 0.4);
        assert_eq!(jobs[0].params.duration(), 2.5);
        assert_eq!(jobs[1].scene, Scene::Cafe);
        assert_eq!(jobs[1].params.volume(), 0.2);
    }

    #[test]
    fn test_manifest_unknown_scene() {
        let manifest = AmbienceManifest::parse(
            r#"
[[scenes]]
scene = "fireplace"
"#,
        )
        .unwrap();

        let err = manifest.jobs().unwrap_err();
        assert!(err.to_string().contains("fireplace"));
    }

    #[test]
    fn test_manifest_invalid_volume() {
        let manifest = AmbienceManifest::parse(
            r#"
[[scenes]]
scene = "rain"
volume = 1.5
"#,
        )
        .unwrap();

        assert!(manifest.jobs().is_err());
    }

    #[test]
    fn test_manifest_negative_duration() {
        let manifest = AmbienceManifest::parse(
            r#"
[[scenes]]
scene = "cafe"
duration = -1.0
"#,
        )
        .unwrap();

        assert!(manifest.jobs().is_err());
    }

    #[test]
    fn test_manifest_empty() {
        let manifest = AmbienceManifest::parse("").unwrap();
        assert!(manifest.jobs().is_err());
    }

    #[test]
    fn test_manifest_rejects_unknown_fields() {
        assert!(AmbienceManifest::parse("sample_rate = 22050").is_err());
    }
}
