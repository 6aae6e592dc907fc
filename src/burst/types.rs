//! Core data types for burst segmentation.

/// One transfer taken from the trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferRecord {
    /// Request start, milliseconds since the epoch
    pub start_ms: i64,
    /// How long the request was outstanding, never negative
    pub duration_ms: i64,
    /// Response headers plus body, in KiB
    pub size_kib: f64,
}

impl TransferRecord {
    pub fn new(start_ms: i64, duration_ms: i64, size_kib: f64) -> Self {
        Self {
            start_ms,
            duration_ms: duration_ms.max(0),
            size_kib,
        }
    }

    /// Time at which the transfer finished, saturating at `i64::MAX`
    pub fn completion_ms(&self) -> i64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    /// Whether the transfer is still in flight at `time_ms`
    pub fn is_outstanding_at(&self, time_ms: i64) -> bool {
        time_ms < self.completion_ms()
    }
}

/// Transfers modelled as running in parallel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Burst {
    records: Vec<TransferRecord>,
}

impl Burst {
    pub fn records(&self) -> &[TransferRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: TransferRecord) {
        self.records.push(record);
    }

    /// True if any member is still in flight at `time_ms`; false when empty
    pub fn is_outstanding_at(&self, time_ms: i64) -> bool {
        self.records.iter().any(|record| record.is_outstanding_at(time_ms))
    }

    /// Latest completion time of any member
    pub fn completion_ms(&self) -> Option<i64> {
        self.records.iter().map(TransferRecord::completion_ms).max()
    }

    pub fn total_kib(&self) -> f64 {
        self.records.iter().map(|record| record.size_kib).sum()
    }
}

impl From<Vec<TransferRecord>> for Burst {
    fn from(records: Vec<TransferRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a Burst {
    type Item = &'a TransferRecord;
    type IntoIter = std::slice::Iter<'a, TransferRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
