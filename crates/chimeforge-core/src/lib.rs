//! ChimeForge Synthesis Core
//!
//! This crate renders short (0.4-1.0 s) procedural notification chimes:
//! randomized two-operator FM over a C major arpeggio, shaped by an
//! attack-decay-release envelope and a one-pole low-pass, normalized to a
//! target peak level, and encoded as a canonical 16-bit PCM mono WAV.
//!
//! # Determinism
//!
//! All rendering is deterministic. Given the same parameters, seed, and
//! timestamp, the output is byte-identical across runs (on the same
//! platform). The crate uses PCG32 for all random number generation, with
//! per-stage streams derived via BLAKE3 hashing, and injects the wall clock
//! as an explicit argument.
//!
//! # Example
//!
//! ```ignore
//! use chimeforge_core::{render_now, ChimeParams};
//!
//! let result = render_now(&ChimeParams::default(), 42)?;
//!
//! // Write to file
//! std::fs::write("chime.wav", &result.wav.wav_data)?;
//!
//! // Get PCM hash for validation
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] / [`render_now()`] - Main entry points
//! - [`timbre`] - Day/night-aware timbre randomization
//! - [`melody`] - Arpeggio pitch selection and onset staggering
//! - [`envelope`] - Per-note attack-decay-release curve
//! - [`synth`] - Two-operator FM mixdown
//! - [`filter`] - One-pole low-pass
//! - [`normalize`] - Peak normalization and i16 quantization
//! - [`wav`] - Deterministic WAV container writer
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod envelope;
pub mod error;
pub mod filter;
pub mod generate;
pub mod melody;
pub mod normalize;
pub mod rng;
pub mod synth;
pub mod timbre;
pub mod wav;

// Re-export main types at crate root
pub use error::{ChimeError, ChimeResult};
pub use generate::{render, render_now, ChimeParams, RenderResult};
pub use melody::Note;
pub use timbre::ToneSpec;
pub use wav::WavResult;
