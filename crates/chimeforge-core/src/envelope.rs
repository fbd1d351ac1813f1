//! Attack-decay-release envelope for chime notes.
//!
//! The curve is the product of three segments: a linear attack ramp, an
//! exponential decay that reaches e^-3 at the nominal decay time, and a
//! linear release fade over the final stretch of the note's window. There is
//! no sustain plateau; the decay keeps settling underneath the release.

use crate::timbre::ToneSpec;

/// Envelope segment lengths in samples for one note.
///
/// All three lengths are floored to 1 sample so degenerate timings can never
/// divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEnvelope {
    /// Attack ramp length in samples.
    pub attack_samples: usize,
    /// Decay time constant in samples.
    pub decay_samples: usize,
    /// Release fade length in samples.
    pub release_samples: usize,
}

impl NoteEnvelope {
    /// Converts a spec's millisecond timings into sample counts.
    pub fn from_spec(spec: &ToneSpec, sample_rate: u32) -> Self {
        Self {
            attack_samples: ms_to_samples(spec.attack_ms, sample_rate).max(1),
            decay_samples: ms_to_samples(spec.decay_ms, sample_rate).max(1),
            release_samples: ms_to_samples(spec.release_ms, sample_rate).max(1),
        }
    }

    /// Envelope level at `idx` samples past the note's onset.
    ///
    /// `window_len` is the note's total window in samples (onset to the end
    /// of the buffer). The release branch is taken strictly past
    /// `window_len - release_samples`; the boundary sample itself still
    /// reads 1.0.
    pub fn level(&self, idx: usize, window_len: usize) -> f64 {
        let attack = (idx as f64 / self.attack_samples as f64).clamp(0.0, 1.0);
        let decay = (-3.0 * idx as f64 / self.decay_samples as f64).exp();
        let release = if idx + self.release_samples > window_len {
            (window_len.saturating_sub(idx) as f64 / self.release_samples as f64).clamp(0.0, 1.0)
        } else {
            1.0
        };
        attack * decay * release
    }
}

/// Floor-converts milliseconds to samples at the given rate.
pub fn ms_to_samples(ms: u32, sample_rate: u32) -> usize {
    ms as usize * sample_rate as usize / 1000
}
