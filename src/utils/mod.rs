//! Shared utilities: pause duration parsing and KiB formatting.

pub mod duration;
pub mod size;

pub use duration::parse_duration_to_seconds;
pub use size::{bytes_to_kib, format_kib, round_kib};
