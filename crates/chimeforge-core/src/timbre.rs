//! Day/night-aware timbre randomization.
//!
//! A [`ToneSpec`] is drawn once per render from the wall-clock hour and an
//! RNG stream. Late-evening and early-morning chimes get a softer profile:
//! faster attack, shallower modulation, darker low-pass cutoff.

use chrono::{NaiveDateTime, Timelike};
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// First hour (inclusive) of the night window.
pub const NIGHT_START_HOUR: u32 = 21;
/// Last hour (inclusive) of the night window.
pub const NIGHT_END_HOUR: u32 = 6;

/// Discrete modulator/carrier ratios the randomizer picks from.
pub const FM_RATIOS: [f64; 3] = [1.5, 2.0, 3.0];

/// Timbral parameters for a single chime render.
///
/// All fields are fixed once drawn; the decay and release times are
/// deterministic functions of the duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    /// Total duration in milliseconds, in [400, 1000].
    pub duration_ms: u32,
    /// Attack time in milliseconds.
    pub attack_ms: u32,
    /// Decay time constant in milliseconds (60% of duration).
    pub decay_ms: u32,
    /// Release fade time in milliseconds (25% of duration).
    pub release_ms: u32,
    /// FM modulation index.
    pub fm_index: f64,
    /// Modulator/carrier frequency ratio.
    pub fm_ratio: f64,
    /// Low-pass cutoff frequency in Hz.
    pub lowpass_hz: f64,
}

impl ToneSpec {
    /// Draws a fresh spec from the current local time and an RNG stream.
    ///
    /// Pure function of `(now, rng state)`: the hour selects the day or night
    /// profile, the RNG supplies duration, modulation index, and ratio.
    pub fn draw(now: NaiveDateTime, rng: &mut Pcg32) -> Self {
        let duration_ms = rng.gen_range(400..=1000);
        let night = is_night(now.hour());
        Self {
            duration_ms,
            attack_ms: if night { 8 } else { 12 },
            decay_ms: (duration_ms as f64 * 0.6).round() as u32,
            release_ms: (duration_ms as f64 * 0.25).round() as u32,
            fm_index: if night {
                0.8 + rng.gen::<f64>() * 0.5
            } else {
                1.2 + rng.gen::<f64>() * 0.8
            },
            fm_ratio: FM_RATIOS[rng.gen_range(0..FM_RATIOS.len())],
            lowpass_hz: if night { 4500.0 } else { 6000.0 },
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

/// Returns true for the quiet-hours window (21:00 through 06:59 wall clock).
pub fn is_night(hour: u32) -> bool {
    hour >= NIGHT_START_HOUR || hour <= NIGHT_END_HOUR
}
