//! Main entry point for chime rendering.
//!
//! Ties the pipeline together: timbre draw, melody pick, FM render, low-pass,
//! normalization, quantization, and container encoding. Each stage gets its
//! own RNG stream derived from the base seed, so the whole render is a pure
//! function of `(params, seed, now)`.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::error::{ChimeError, ChimeResult};
use crate::filter::OnePole;
use crate::melody::{pick_notes, Note};
use crate::normalize::{normalize, quantize};
use crate::rng::create_component_rng;
use crate::synth::render_notes;
use crate::timbre::ToneSpec;
use crate::wav::WavResult;

/// Highest sample rate accepted for a render.
///
/// At one second of mono PCM16 this keeps the data chunk far below the
/// container's u32 size fields.
pub const MAX_SAMPLE_RATE: u32 = 192_000;

/// Caller-supplied rendering parameters.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChimeParams {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Target peak level in dBFS.
    pub target_db: f64,
}

impl Default for ChimeParams {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            target_db: -1.0,
        }
    }
}

/// Result of a chime render.
#[derive(Debug)]
pub struct RenderResult {
    /// Encoded WAV container plus PCM hash.
    pub wav: WavResult,
    /// The timbre spec that was drawn.
    pub spec: ToneSpec,
    /// The melody that was drawn.
    pub notes: Vec<Note>,
}

/// Renders one chime deterministically.
///
/// # Arguments
/// * `params` - Sample rate and target peak level
/// * `seed` - Base seed; all component streams derive from it
/// * `now` - Local wall-clock time, used only for the day/night profile
///
/// # Returns
/// The encoded container along with the drawn spec and notes
pub fn render(params: &ChimeParams, seed: u32, now: NaiveDateTime) -> ChimeResult<RenderResult> {
    validate(params)?;

    let spec = ToneSpec::draw(now, &mut create_component_rng(seed, "timbre"));
    let notes = pick_notes(&mut create_component_rng(seed, "melody"));

    let mut samples = render_notes(
        &spec,
        &notes,
        params.sample_rate,
        &mut create_component_rng(seed, "detune"),
    );
    OnePole::lowpass(spec.lowpass_hz, params.sample_rate).apply(&mut samples);
    normalize(&mut samples, params.target_db);
    let pcm = quantize(&samples);

    Ok(RenderResult {
        wav: WavResult::from_pcm16(&pcm, params.sample_rate),
        spec,
        notes,
    })
}

/// Renders one chime at the current local time.
pub fn render_now(params: &ChimeParams, seed: u32) -> ChimeResult<RenderResult> {
    render(params, seed, Local::now().naive_local())
}

fn validate(params: &ChimeParams) -> ChimeResult<()> {
    if params.sample_rate == 0 || params.sample_rate > MAX_SAMPLE_RATE {
        return Err(ChimeError::InvalidSampleRate {
            rate: params.sample_rate,
        });
    }
    if !params.target_db.is_finite() || params.target_db > 0.0 {
        return Err(ChimeError::InvalidTargetLevel {
            db: params.target_db,
        });
    }
    Ok(())
}
