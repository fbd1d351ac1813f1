//! One-pole low-pass filter.
//!
//! A first-order IIR smoother used to take the digital edge off the FM mix.
//! The coefficient follows the analog RC prototype: `rc = 1 / (2π·cutoff)`,
//! `alpha = 1 / (1 + rc·sample_rate)`, and each output is the state after
//! `lp += alpha * (x - lp)`. The recurrence is stateful across samples and
//! must run in index order.

use std::f64::consts::PI;

/// One-pole low-pass filter state.
#[derive(Debug, Clone, Copy)]
pub struct OnePole {
    alpha: f64,
    state: f64,
}

impl OnePole {
    /// Creates a low-pass filter for the given cutoff.
    ///
    /// # Arguments
    /// * `cutoff_hz` - Cutoff frequency in Hz
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn lowpass(cutoff_hz: f64, sample_rate: u32) -> Self {
        let rc = 1.0 / (2.0 * PI * cutoff_hz);
        Self {
            alpha: 1.0 / (1.0 + rc * sample_rate as f64),
            state: 0.0,
        }
    }

    /// Feeds one sample through the filter and returns the new output.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.state += self.alpha * (input - self.state);
        self.state
    }

    /// Filters a buffer in place, left to right.
    pub fn apply(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}
