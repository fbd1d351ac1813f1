//! Inspect command: show the spec and melody a seed would draw.

use std::process::ExitCode;

use anyhow::{bail, Result};
use chimeforge_core::melody::pick_notes;
use chimeforge_core::rng::create_component_rng;
use chimeforge_core::timbre::{is_night, ToneSpec};
use chimeforge_core::Note;
use chrono::{Local, NaiveDateTime, Timelike};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct InspectReport {
    seed: u32,
    hour: u32,
    night: bool,
    spec: ToneSpec,
    notes: Vec<Note>,
}

/// Draws and prints the parameters for a seed without rendering audio.
///
/// `hour` overrides the wall-clock hour so the night profile can be
/// inspected during the day.
pub fn run(seed: u32, hour: Option<u32>, json: bool) -> Result<ExitCode> {
    let now = resolve_time(hour)?;

    let spec = ToneSpec::draw(now, &mut create_component_rng(seed, "timbre"));
    let notes = pick_notes(&mut create_component_rng(seed, "melody"));

    let report = InspectReport {
        seed,
        hour: now.hour(),
        night: is_night(now.hour()),
        spec,
        notes,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} (seed {}, hour {}, {})",
        "Chime parameters".cyan().bold(),
        report.seed,
        report.hour,
        if report.night { "night" } else { "day" },
    );
    println!("  {}: {} ms", "duration".dimmed(), spec.duration_ms);
    println!(
        "  {}: {} / {} / {} ms",
        "attack/decay/release".dimmed(),
        spec.attack_ms,
        spec.decay_ms,
        spec.release_ms
    );
    println!(
        "  {}: index {:.3}, ratio {}",
        "fm".dimmed(),
        spec.fm_index,
        spec.fm_ratio
    );
    println!("  {}: {} Hz", "lowpass".dimmed(), spec.lowpass_hz);
    for note in &report.notes {
        println!(
            "  {}: {:.2} Hz at +{} ms",
            "note".dimmed(),
            note.frequency_hz,
            note.start_offset_ms
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn resolve_time(hour: Option<u32>) -> Result<NaiveDateTime> {
    let now = Local::now().naive_local();
    match hour {
        None => Ok(now),
        Some(h) if h < 24 => Ok(now
            .date()
            .and_hms_opt(h, 0, 0)
            .expect("hour < 24 always forms a valid time")),
        Some(h) => bail!("--hour must be 0-23, got {h}"),
    }
}
