//! HAR trace decoding.
//!
//! Turns an HTTP Archive file into the flat, chronological list of
//! [`TransferRecord`](crate::burst::TransferRecord)s the segmenter consumes.
//! Only the handful of fields the converter needs are modelled; everything
//! else in the archive is ignored.

pub mod loader;
pub mod timestamp;
pub mod types;

pub use loader::{load_trace, parse_trace_str, Trace};
pub use timestamp::decode_timestamp;
pub use types::{HarEntry, HarFile, HarLog, HarResponse};

use std::path::PathBuf;

/// Errors that can occur while decoding a trace
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("Failed to read trace file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed trace: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },
}
