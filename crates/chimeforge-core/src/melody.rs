//! Melody selection over a fixed arpeggio pitch pool.
//!
//! Every chime plays 2 or 3 notes drawn without replacement from a C major
//! arpeggio (C4, E4, G4, C5), ordered by one of three patterns and staggered
//! 50 ms apart so the notes cascade instead of landing as a block chord.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// C major arpeggio pool: C4, E4, G4, C5 in Hz.
pub const PITCH_POOL: [f64; 4] = [261.63, 329.63, 392.00, 523.25];

/// Onset spacing between consecutive notes in milliseconds.
pub const NOTE_STAGGER_MS: u32 = 50;

/// A single scheduled note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Base frequency in Hz, always one of [`PITCH_POOL`].
    pub frequency_hz: f64,
    /// Onset relative to the start of the buffer, in milliseconds.
    pub start_offset_ms: u32,
}

/// How the drawn pitches are arranged in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderPattern {
    /// Rising by frequency.
    Ascending,
    /// Falling by frequency.
    Descending,
    /// Kept in draw order.
    AsDrawn,
}

/// Picks an ordered, staggered melody from the pitch pool.
///
/// Draws 2 notes with probability 0.6, otherwise 3, as a shuffle-and-take
/// over the full pool (uniform over all ordered K-selections). One of the
/// three order patterns is then applied with equal probability, and onsets
/// are assigned as `index * 50` ms in the final order.
pub fn pick_notes(rng: &mut Pcg32) -> Vec<Note> {
    let count = if rng.gen_bool(0.6) { 2 } else { 3 };

    let mut pool = PITCH_POOL;
    pool.shuffle(rng);
    let mut chosen: Vec<f64> = pool[..count].to_vec();

    match draw_pattern(rng) {
        OrderPattern::Ascending => chosen.sort_by(f64::total_cmp),
        OrderPattern::Descending => {
            chosen.sort_by(f64::total_cmp);
            chosen.reverse();
        }
        OrderPattern::AsDrawn => {}
    }

    chosen
        .into_iter()
        .enumerate()
        .map(|(i, frequency_hz)| Note {
            frequency_hz,
            start_offset_ms: i as u32 * NOTE_STAGGER_MS,
        })
        .collect()
}

fn draw_pattern(rng: &mut Pcg32) -> OrderPattern {
    match rng.gen_range(0..3) {
        0 => OrderPattern::Ascending,
        1 => OrderPattern::Descending,
        _ => OrderPattern::AsDrawn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_note_count_and_pool_membership() {
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let notes = pick_notes(&mut rng);
            assert!(notes.len() == 2 || notes.len() == 3);
            for note in &notes {
                assert!(PITCH_POOL.contains(&note.frequency_hz));
            }
        }
    }

    #[test]
    fn test_pitches_are_distinct() {
        let mut rng = create_rng(1);
        for _ in 0..500 {
            let notes = pick_notes(&mut rng);
            for (i, a) in notes.iter().enumerate() {
                for b in &notes[i + 1..] {
                    assert_ne!(a.frequency_hz, b.frequency_hz);
                }
            }
        }
    }

    #[test]
    fn test_onset_stagger() {
        let mut rng = create_rng(7);
        for _ in 0..200 {
            let notes = pick_notes(&mut rng);
            for (i, note) in notes.iter().enumerate() {
                assert_eq!(note.start_offset_ms, i as u32 * NOTE_STAGGER_MS);
            }
        }
    }

    #[test]
    fn test_two_note_probability_roughly_point_six() {
        let mut rng = create_rng(12345);
        let mut twos = 0usize;
        let total = 2000usize;
        for _ in 0..total {
            if pick_notes(&mut rng).len() == 2 {
                twos += 1;
            }
        }
        let fraction = twos as f64 / total as f64;
        assert!((0.55..0.65).contains(&fraction), "fraction = {fraction}");
    }

    #[test]
    fn test_all_patterns_occur() {
        let mut rng = create_rng(9);
        let mut saw_ascending = false;
        let mut saw_descending = false;
        for _ in 0..500 {
            let notes = pick_notes(&mut rng);
            let freqs: Vec<f64> = notes.iter().map(|n| n.frequency_hz).collect();
            let mut sorted = freqs.clone();
            sorted.sort_by(f64::total_cmp);
            if freqs == sorted {
                saw_ascending = true;
            }
            sorted.reverse();
            if freqs == sorted {
                saw_descending = true;
            }
        }
        assert!(saw_ascending);
        assert!(saw_descending);
    }

    #[test]
    fn test_pick_determinism() {
        let notes1 = pick_notes(&mut create_rng(77));
        let notes2 = pick_notes(&mut create_rng(77));
        assert_eq!(notes1, notes2);
    }
}
