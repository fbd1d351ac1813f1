//! End-to-end rendering tests over the public API.

use chimeforge_core::{render, ChimeParams};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn at_hour(hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(hour, 15, 0)
        .unwrap()
}

#[test]
fn test_fixed_seed_and_time_reproduce_bytes() {
    let params = ChimeParams::default();
    let a = render(&params, 1234, at_hour(10)).expect("first render");
    let b = render(&params, 1234, at_hour(10)).expect("second render");

    assert_eq!(a.wav.wav_data, b.wav.wav_data);
    assert_eq!(a.spec, b.spec);
    assert_eq!(a.notes, b.notes);
}

#[test]
fn test_seed_changes_audio() {
    let params = ChimeParams::default();
    let a = render(&params, 1, at_hour(10)).unwrap();
    let b = render(&params, 2, at_hour(10)).unwrap();
    assert_ne!(a.wav.pcm_hash, b.wav.pcm_hash);
}

#[test]
fn test_spec_invariants_across_seeds() {
    let params = ChimeParams::default();
    for seed in 0..50u32 {
        let result = render(&params, seed, at_hour(9)).unwrap();
        let spec = result.spec;
        assert!((400..=1000).contains(&spec.duration_ms));
        assert_eq!(spec.decay_ms, (spec.duration_ms as f64 * 0.6).round() as u32);
        assert_eq!(
            spec.release_ms,
            (spec.duration_ms as f64 * 0.25).round() as u32
        );
    }
}

#[test]
fn test_melody_invariants_across_seeds() {
    let params = ChimeParams::default();
    let pool = chimeforge_core::melody::PITCH_POOL;
    for seed in 0..50u32 {
        let result = render(&params, seed, at_hour(9)).unwrap();
        assert!(result.notes.len() == 2 || result.notes.len() == 3);
        for (i, note) in result.notes.iter().enumerate() {
            assert!(pool.contains(&note.frequency_hz));
            assert_eq!(note.start_offset_ms, i as u32 * 50);
        }
    }
}

#[test]
fn test_sample_count_at_various_rates() {
    for sample_rate in [8000u32, 22050, 44100, 48000] {
        let params = ChimeParams {
            sample_rate,
            target_db: -1.0,
        };
        let result = render(&params, 7, at_hour(9)).unwrap();
        let expected = result.spec.duration_ms as usize * sample_rate as usize / 1000;
        assert_eq!(result.wav.num_samples, expected);
        assert_eq!(result.wav.wav_data.len(), 44 + 2 * expected);
    }
}

#[test]
fn test_night_render_uses_night_profile() {
    let params = ChimeParams::default();
    let night = render(&params, 42, at_hour(23)).unwrap();
    assert_eq!(night.spec.attack_ms, 8);
    assert_eq!(night.spec.lowpass_hz, 4500.0);

    let day = render(&params, 42, at_hour(13)).unwrap();
    assert_eq!(day.spec.attack_ms, 12);
    assert_eq!(day.spec.lowpass_hz, 6000.0);
}

#[test]
fn test_time_of_day_changes_audio_for_same_seed() {
    let params = ChimeParams::default();
    let night = render(&params, 42, at_hour(23)).unwrap();
    let day = render(&params, 42, at_hour(13)).unwrap();
    assert_ne!(night.wav.pcm_hash, day.wav.pcm_hash);
}

#[test]
fn test_normalized_peak_matches_target() {
    for target_db in [-1.0f64, -3.0, -6.0] {
        let params = ChimeParams {
            sample_rate: 44100,
            target_db,
        };
        let result = render(&params, 11, at_hour(9)).unwrap();

        let pcm = chimeforge_core::wav::extract_pcm_data(&result.wav.wav_data).unwrap();
        let peak = pcm
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]).unsigned_abs())
            .max()
            .unwrap() as f64;

        let target = 10.0f64.powf(target_db / 20.0);
        assert!(
            (peak / 32767.0 - target).abs() <= 1.0 / 32767.0,
            "peak {peak} missed target {target_db} dBFS"
        );
    }
}
