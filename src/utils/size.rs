//! Transfer size helpers.
//!
//! Sizes travel through the segmenter as fractional KiB and are only rounded
//! when they are written into the graph. Rounding is half away from zero, so
//! 2.5 KiB becomes 3 KiB and 3.5 KiB becomes 4 KiB.

/// Convert a byte count to kibibytes.
pub fn bytes_to_kib(bytes: f64) -> f64 {
    bytes / 1024.0
}

/// Round a KiB value to a whole number of KiB.
///
/// HAR uses -1 for unknown sizes, so a record can sum to a small negative
/// value. Those are reported as zero.
pub fn round_kib(size_kib: f64) -> u64 {
    let rounded = size_kib.round();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else {
        rounded as u64
    }
}

/// Format a KiB value as the `size` attribute of a transfer node.
pub fn format_kib(size_kib: f64) -> String {
    format!("{} KiB", round_kib(size_kib))
}
