//! Trace loading: HAR JSON in, transfer records out.

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use super::timestamp::decode_timestamp;
use super::types::{HarEntry, HarFile};
use super::TraceError;
use crate::burst::TransferRecord;
use crate::utils::size::bytes_to_kib;

/// Records decoded from one trace
#[derive(Debug, Clone, Default)]
pub struct Trace {
    /// Usable records, in the order they appear in the archive
    pub records: Vec<TransferRecord>,
    /// Entries dropped because their response sizes were missing
    pub skipped: usize,
}

impl Trace {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Convert one entry, or `None` if it has no usable size
fn entry_to_record(index: usize, entry: &HarEntry) -> Result<Option<TransferRecord>, TraceError> {
    let Some(bytes) = entry.response_bytes() else {
        debug!(
            "Skipping entry {} started at {}: response headersSize/bodySize missing",
            index, entry.started_date_time
        );
        return Ok(None);
    };

    let start_ms = decode_timestamp(&entry.started_date_time)?;

    // HAR allows fractional milliseconds; whole milliseconds are enough here.
    // The cast saturates, so absurdly large times become i64::MAX.
    let mut duration_ms = entry.time.trunc() as i64;
    if duration_ms < 0 {
        warn!("Entry {} has negative time {}, treating it as 0 ms", index, entry.time);
        duration_ms = 0;
    }

    Ok(Some(TransferRecord::new(start_ms, duration_ms, bytes_to_kib(bytes))))
}

/// Decode a HAR document held in memory
pub fn parse_trace_str(content: &str) -> Result<Trace, TraceError> {
    let har: HarFile = serde_json::from_str(content)?;

    let mut trace = Trace::default();
    for (index, entry) in har.log.entries.iter().enumerate() {
        match entry_to_record(index, entry)? {
            Some(record) => trace.records.push(record),
            None => trace.skipped += 1,
        }
    }

    Ok(trace)
}

/// Read and decode a HAR file
pub fn load_trace(path: &Path) -> Result<Trace, TraceError> {
    info!("Loading trace from: {:?}", path);

    let content = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let trace = parse_trace_str(&content)?;
    info!(
        "Decoded {} transfers ({} entries skipped for missing sizes)",
        trace.records.len(),
        trace.skipped
    );

    Ok(trace)
}
