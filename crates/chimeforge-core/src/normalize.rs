//! Peak normalization and 16-bit quantization.

/// Floor applied to the measured peak so a silent buffer never divides by zero.
const PEAK_EPSILON: f64 = 1e-9;

/// Scales the buffer so its peak hits the target level in dBFS.
///
/// The measured peak is floored at a small epsilon; an all-zero buffer picks
/// up an enormous gain but stays all-zero.
///
/// # Arguments
/// * `samples` - Audio samples to normalize in place
/// * `target_db` - Target peak level in dBFS (e.g. -1.0)
pub fn normalize(samples: &mut [f64], target_db: f64) {
    let target_peak = 10.0_f64.powf(target_db / 20.0);
    let peak = samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
        .max(PEAK_EPSILON);

    let gain = target_peak / peak;
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
}

/// Quantizes normalized samples to 16-bit signed integers.
///
/// Values outside [-1, 1] are clipped before rounding, so the result can
/// never wrap around full scale.
pub fn quantize(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&sample| (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hits_target_peak() {
        let mut samples = vec![0.1, -0.25, 0.2];
        normalize(&mut samples, -1.0);
        let peak = samples.iter().map(|s| s.abs()).fold(0.0f64, f64::max);
        let target = 10.0f64.powf(-1.0 / 20.0);
        assert!((peak - target).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_attenuates_loud_input() {
        let mut samples = vec![2.0, -4.0, 1.0];
        normalize(&mut samples, -3.0);
        let peak = samples.iter().map(|s| s.abs()).fold(0.0f64, f64::max);
        let target = 10.0f64.powf(-3.0 / 20.0);
        assert!((peak - target).abs() < 1e-12);
        assert!(peak < 1.0);
    }

    #[test]
    fn test_normalize_silence_stays_silent() {
        let mut samples = vec![0.0; 128];
        normalize(&mut samples, -1.0);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_quantize_full_scale() {
        let quantized = quantize(&[1.0, -1.0, 0.0]);
        assert_eq!(quantized, vec![32767, -32767, 0]);
    }

    #[test]
    fn test_quantize_clips_out_of_range() {
        let quantized = quantize(&[1.5, -2.0]);
        assert_eq!(quantized, vec![32767, -32767]);
    }

    #[test]
    fn test_quantize_rounds() {
        // 0.5 * 32767 = 16383.5 rounds away from zero
        let quantized = quantize(&[0.5, -0.5]);
        assert_eq!(quantized, vec![16384, -16384]);
    }

    #[test]
    fn test_normalized_quantized_peak_within_one_step() {
        let mut samples: Vec<f64> = (0..500).map(|i| (i as f64 * 0.1).sin() * 0.3).collect();
        normalize(&mut samples, -1.0);
        let quantized = quantize(&samples);
        let peak = quantized.iter().map(|s| s.unsigned_abs()).max().unwrap() as f64;
        let target = 10.0f64.powf(-1.0 / 20.0);
        assert!((peak / 32767.0 - target).abs() <= 1.0 / 32767.0);
    }
}
