//! Display-name and media-type metadata for stored chimes.

/// MIME type matching the container the core produces.
pub const MIME_WAV: &str = "audio/wav";

/// Default display name for a generated chime, stamped with the wall clock.
pub fn display_name(timestamp_millis: i64) -> String {
    format!("chime_{timestamp_millis}")
}

/// File name for one variation of a run.
///
/// A single render keeps the bare stem; multi-variation runs get a
/// zero-padded index suffix so the files sort in generation order.
pub fn variation_file_name(stem: &str, index: u32, count: u32) -> String {
    if count > 1 {
        format!("{stem}_{index:02}.wav")
    } else {
        format!("{stem}.wav")
    }
}
