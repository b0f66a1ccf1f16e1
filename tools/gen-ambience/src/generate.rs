//! Scene generation driver
//!
//! Renders each job fully in memory, then hands it to the sink.

use crate::manifest::Job;
use anyhow::{Context, Result};
use proc_ambience::audio::{AudioSink, PcmFormat, SAMPLE_RATE, Scene, SceneParams};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Build one job per scene with shared parameters
pub fn jobs_for(scenes: &[Scene], params: SceneParams) -> Vec<Job> {
    scenes.iter().map(|&scene| Job { scene, params }).collect()
}

/// Generate every job into `output_dir`, creating it as needed
///
/// Returns the written paths in job order. The first failure aborts the run.
pub fn generate_all<R: Rng, S: AudioSink>(
    jobs: &[Job],
    output_dir: &Path,
    rng: &mut R,
    sink: &S,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let mut written = Vec::with_capacity(jobs.len());
    for job in jobs {
        tracing::info!("Generating {}...", job.scene);
        let frames = job.scene.compose(rng, &job.params);

        let path = output_dir.join(job.scene.file_name());
        sink.write(&path, PcmFormat::AMBIENCE, &frames)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let samples = frames.len() / 2;
        tracing::info!(
            "Generated {} ({} samples, {:.2}s)",
            path.display(),
            samples,
            samples as f64 / SAMPLE_RATE as f64
        );
        written.push(path);
    }

    Ok(written)
}
