//! Generate command: render chimes and write them to disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chimeforge_core::{render_now, ChimeParams, Note, ToneSpec};
use chrono::Local;
use colored::Colorize;
use serde::Serialize;

use crate::asset::{display_name, variation_file_name, MIME_WAV};

/// One generated file in the machine-readable report.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    mime_type: &'static str,
    seed: u32,
    sample_rate: u32,
    target_db: f64,
    spec: ToneSpec,
    notes: Vec<Note>,
    pcm_hash: String,
}

/// Renders `count` chimes, writing each to `out_dir`.
///
/// Variations past the first increment the seed, so a run is reproducible
/// from its base seed alone.
pub fn run(
    out_dir: &Path,
    name: Option<&str>,
    seed: Option<u32>,
    count: u32,
    sample_rate: u32,
    target_db: f64,
    json: bool,
) -> Result<ExitCode> {
    let now = Local::now();
    let base_seed = seed.unwrap_or(now.timestamp_millis() as u32);
    let stem = name
        .map(str::to_owned)
        .unwrap_or_else(|| display_name(now.timestamp_millis()));
    let params = ChimeParams {
        sample_rate,
        target_db,
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    if !json {
        println!("{}", "Generating chimes...".cyan().bold());
    }

    let mut reports = Vec::with_capacity(count as usize);
    for index in 0..count {
        let variation_seed = base_seed.wrapping_add(index);
        let result = render_now(&params, variation_seed)
            .with_context(|| format!("rendering chime with seed {variation_seed}"))?;

        let path = out_dir.join(variation_file_name(&stem, index, count));
        fs::write(&path, &result.wav.wav_data)
            .with_context(|| format!("writing {}", path.display()))?;

        if !json {
            println!(
                "  {} {} ({} notes, {} ms, seed {}, {})",
                "WROTE".green().bold(),
                path.display(),
                result.notes.len(),
                result.spec.duration_ms,
                variation_seed,
                &result.wav.pcm_hash[..12].dimmed(),
            );
        }

        reports.push(FileReport {
            path,
            mime_type: MIME_WAV,
            seed: variation_seed,
            sample_rate,
            target_db,
            spec: result.spec,
            notes: result.notes,
            pcm_hash: result.wav.pcm_hash,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(ExitCode::SUCCESS)
}
