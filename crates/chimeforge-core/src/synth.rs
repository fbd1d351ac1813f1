//! Two-operator FM rendering of a staggered note sequence.
//!
//! Each note is a sine carrier whose phase is perturbed by a sine modulator
//! at `fm_ratio` times the note frequency, shaped by its own attack-decay-
//! release envelope. Notes start 50 ms apart and all ring until the end of
//! the buffer; their contributions sum into a single mono mix.

use std::f64::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

use crate::envelope::{ms_to_samples, NoteEnvelope};
use crate::melody::Note;
use crate::timbre::ToneSpec;

/// Maximum detune half-range in semitones (±5 cents).
const DETUNE_SEMITONES: f64 = 0.05;

/// Draws a detune ratio within ±5 cents of unity.
///
/// The ratio is `2^((u - 0.5) * 0.05 / 12)` for a fresh uniform `u`, drawn
/// once per note per render.
pub fn detune_ratio(rng: &mut Pcg32) -> f64 {
    2.0f64.powf((rng.gen::<f64>() - 0.5) * DETUNE_SEMITONES / 12.0)
}

/// Renders the mixed float buffer for a spec and note list.
///
/// The buffer length is `duration_ms * sample_rate / 1000` (floor division).
/// Output amplitudes are unnormalized; with up to 3 overlapping notes the
/// mix can exceed [-1, 1] and is brought back in range downstream.
pub fn render_notes(
    spec: &ToneSpec,
    notes: &[Note],
    sample_rate: u32,
    rng: &mut Pcg32,
) -> Vec<f64> {
    let n = ms_to_samples(spec.duration_ms, sample_rate);
    let envelope = NoteEnvelope::from_spec(spec, sample_rate);
    let dt = 1.0 / sample_rate as f64;
    let two_pi = 2.0 * PI;

    // One detune draw per note, fixed for the whole render
    let voices: Vec<(f64, usize)> = notes
        .iter()
        .map(|note| {
            let freq = note.frequency_hz * detune_ratio(rng);
            let start = ms_to_samples(note.start_offset_ms, sample_rate);
            (freq, start)
        })
        .collect();

    let mut mix = vec![0.0f64; n];
    for (i, out) in mix.iter_mut().enumerate() {
        for &(freq, start) in &voices {
            if i < start {
                continue;
            }
            let idx = i - start;
            let window_len = n - start;
            if idx >= window_len {
                continue;
            }
            let tt = idx as f64 * dt;

            let env = envelope.level(idx, window_len);
            let modulator = (two_pi * freq * spec.fm_ratio * tt).sin();
            let carrier = (two_pi * freq * tt + spec.fm_index * modulator).sin();
            *out += carrier * env;
        }
    }

    mix
}
