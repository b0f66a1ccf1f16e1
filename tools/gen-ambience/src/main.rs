//! gen-ambience - Ambient soundscape generator
//!
//! Renders the rain, forest and cafe ambience loops to mono 16-bit 44.1kHz
//! WAV files.
//!
//! # Usage
//!
//! ```bash
//! # Write rain.wav, forest.wav and cafe.wav (5s, volume 0.5) to public/sounds
//! gen-ambience
//!
//! # Longer, reproducible rain only
//! gen-ambience --scene rain --duration 30 --seed 42
//!
//! # Render from a manifest
//! gen-ambience --manifest ambience.toml
//! ```
//!
//! # Manifest (ambience.toml)
//!
//! ```toml
//! output = "public/sounds"
//!
//! [[scenes]]
//! scene = "forest"
//! duration = 5.0
//! volume = 0.5   # optional, defaults to the scene's own volume
//! ```

mod generate;
mod manifest;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use manifest::{AmbienceManifest, DEFAULT_DURATION, DEFAULT_OUTPUT, DEFAULT_VOLUME};
use proc_ambience::audio::{Scene, SceneParams, WavSink};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::path::PathBuf;

/// gen-ambience - Ambient soundscape generator
#[derive(Parser)]
#[command(name = "gen-ambience")]
#[command(about = "Generate procedural ambience loops (rain, forest, cafe) as WAV files")]
#[command(version)]
struct Cli {
    /// Output directory (overrides manifest)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scene length in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION)]
    duration: f64,

    /// Volume (0.0 to 1.0)
    #[arg(short, long, default_value_t = DEFAULT_VOLUME)]
    volume: f64,

    /// Only generate these scenes (repeatable, default: all)
    #[arg(short, long = "scene", value_enum)]
    scenes: Vec<SceneArg>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Path to an ambience.toml manifest
    #[arg(short, long, conflicts_with_all = ["duration", "volume", "scenes"])]
    manifest: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SceneArg {
    Rain,
    Forest,
    Cafe,
}

impl From<SceneArg> for Scene {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Rain => Scene::Rain,
            SceneArg::Forest => Scene::Forest,
            SceneArg::Cafe => Scene::Cafe,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let (jobs, manifest_output) = match &cli.manifest {
        Some(path) => {
            tracing::info!("Loading manifest {:?}", path);
            let manifest = AmbienceManifest::load(path)?;
            (manifest.jobs()?, Some(manifest.output))
        }
        None => {
            let params = SceneParams::new(cli.duration, cli.volume)
                .context("Invalid --duration/--volume")?;
            let scenes: Vec<Scene> = if cli.scenes.is_empty() {
                Scene::ALL.to_vec()
            } else {
                cli.scenes.iter().map(|&s| s.into()).collect()
            };
            (generate::jobs_for(&scenes, params), None)
        }
    };

    let output = cli
        .output
        .or(manifest_output)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let seed = cli.seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!("Using seed {} (pass --seed {} to reproduce)", seed, seed);
    let mut rng = Pcg32::seed_from_u64(seed);

    let written = generate::generate_all(&jobs, &output, &mut rng, &WavSink)?;
    tracing::info!("Done! Generated {} sounds in {}", written.len(), output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["gen-ambience"]);
        assert_eq!(cli.duration, 5.0);
        assert_eq!(cli.volume, 0.5);
        assert!(cli.scenes.is_empty());
        assert!(cli.output.is_none());
        assert!(cli.seed.is_none());
        assert!(cli.manifest.is_none());
    }

    #[test]
    fn test_cli_scene_filter() {
        let cli = Cli::parse_from(["gen-ambience", "-s", "rain", "--scene", "cafe", "--seed", "7"]);
        let scenes: Vec<Scene> = cli.scenes.iter().map(|&s| s.into()).collect();
        assert_eq!(scenes, vec![Scene::Rain, Scene::Cafe]);
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn test_cli_manifest_conflicts_with_params() {
        let result = Cli::try_parse_from(["gen-ambience", "-m", "ambience.toml", "-d", "3"]);
        assert!(result.is_err());
        let result = Cli::try_parse_from(["gen-ambience", "-m", "ambience.toml", "-o", "out"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_scene() {
        assert!(Cli::try_parse_from(["gen-ambience", "--scene", "fireplace"]).is_err());
    }
}
