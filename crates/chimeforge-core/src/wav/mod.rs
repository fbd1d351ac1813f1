//! Deterministic WAV container writer.
//!
//! Writes canonical 44-byte-header, 16-bit PCM mono WAV files with no
//! timestamps or variable metadata, so identical sample buffers always
//! produce byte-identical containers. The BLAKE3 hash of the PCM payload is
//! carried alongside the bytes for determinism validation.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{pcm16_to_bytes, write_wav, write_wav_to_vec};
