//! Burst segmentation.
//!
//! A browser issues requests in waves: it fires off everything it knows
//! about, then has to wait for some of those responses before it can issue
//! more. This module recovers those waves ("bursts") from per-request start
//! times and durations.
//!
//! A record joins the current burst if it starts while *any* member of that
//! burst is still outstanding, i.e. before the latest completion time seen so
//! far in the burst. Membership is therefore transitive: two records that do
//! not overlap each other can still share a burst if a slow third record
//! spans both. Otherwise the current burst is closed and the record opens a
//! new one.

pub mod types;

pub use types::{Burst, TransferRecord};

use log::debug;

/// The burst being accumulated during a segmentation pass
#[derive(Debug, Default)]
pub struct BurstAccumulator {
    current: Burst,
}

impl BurstAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next record in chronological order.
    ///
    /// Returns the previous burst when `record` had to open a new one. The
    /// very first record closes the initial empty burst, so callers see one
    /// leading empty burst per pass.
    pub fn push(&mut self, record: TransferRecord) -> Option<Burst> {
        if self.current.is_outstanding_at(record.start_ms) {
            self.current.push(record);
            None
        } else {
            let closed = std::mem::take(&mut self.current);
            self.current.push(record);
            Some(closed)
        }
    }

    /// Close the pass and return the last (possibly empty) burst
    pub fn finish(self) -> Burst {
        self.current
    }
}

/// Split chronologically ordered records into bursts.
///
/// The output keeps the leading empty burst(s) produced by the scan; pass it
/// through [`trim_leading_empty`] before building a graph. Zero records
/// yield a single empty burst.
pub fn segment<I>(records: I) -> Vec<Burst>
where
    I: IntoIterator<Item = TransferRecord>,
{
    let mut accumulator = BurstAccumulator::new();
    let mut bursts = Vec::new();

    for record in records {
        if let Some(closed) = accumulator.push(record) {
            bursts.push(closed);
        }
    }
    bursts.push(accumulator.finish());

    bursts
}

/// Drop empty bursts from the front of a segmentation result
pub fn trim_leading_empty(mut bursts: Vec<Burst>) -> Vec<Burst> {
    let leading = bursts.iter().take_while(|burst| burst.is_empty()).count();
    bursts.drain(..leading);
    bursts
}

/// Segment and trim in one step, logging the resulting bursts at debug level
pub fn segment_trimmed<I>(records: I) -> Vec<Burst>
where
    I: IntoIterator<Item = TransferRecord>,
{
    let bursts = trim_leading_empty(segment(records));

    for (index, burst) in bursts.iter().enumerate() {
        debug!(
            "Burst {}: {} transfers, {:.2} KiB, outstanding until {} ms",
            index,
            burst.len(),
            burst.total_kib(),
            burst.completion_ms().unwrap_or_default()
        );
        for record in burst.records() {
            debug!("  {:?}", record);
        }
    }

    bursts
}
