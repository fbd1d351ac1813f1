//! Renders a single chime to chime.wav in the current directory.

use chimeforge_core::{render_now, ChimeParams};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42u32);

    let result = render_now(&ChimeParams::default(), seed).expect("render failed");

    println!(
        "seed {} -> {} notes, {} ms, pcm hash {}",
        seed,
        result.notes.len(),
        result.spec.duration_ms,
        result.wav.pcm_hash
    );

    std::fs::write("chime.wav", &result.wav.wav_data).expect("write failed");
    println!("wrote chime.wav ({} bytes)", result.wav.wav_data.len());
}
