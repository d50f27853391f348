//! Decoding statistics
//!
//! Counters accumulate across decode calls on the same decoder until it is
//! reset. Every byte the decoder steps over is accounted for:
//!
//! ```text
//! bytes_consumed = records_decoded * RECORD_SIZE + structural_errors + checksum_errors
//! ```

use core::time::Duration;

use crate::error::Error;
use crate::RECORD_SIZE;

/// Error and throughput counters for one decoder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodingStats {
    /// Records that parsed structurally, valid or not
    pub records_decoded: u64,
    /// Records that passed validation and were returned
    pub valid_records: u64,
    /// Records dropped for out-of-range field values
    pub validation_errors: u64,
    /// Resync steps caused by malformed bytes other than a CRC mismatch
    pub structural_errors: u64,
    /// Resync steps caused by a CRC32 mismatch
    pub checksum_errors: u64,
    /// Sum of all error counters
    pub error_count: u64,
    /// Bytes stepped over by the read cursor
    pub bytes_consumed: u64,
    /// Trailing bytes of the last call, shorter than one record
    pub truncated_bytes: u64,
    /// Wall-clock time spent decoding
    pub elapsed: Duration,
}

impl DecodingStats {
    /// Create empty stats
    pub const fn new() -> Self {
        Self {
            records_decoded: 0,
            valid_records: 0,
            validation_errors: 0,
            structural_errors: 0,
            checksum_errors: 0,
            error_count: 0,
            bytes_consumed: 0,
            truncated_bytes: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Count a record accepted into the output
    #[inline]
    pub(crate) fn record_valid(&mut self) {
        self.records_decoded += 1;
        self.valid_records += 1;
        self.bytes_consumed += RECORD_SIZE as u64;
    }

    /// Count a record rejected by semantic validation
    #[inline]
    pub(crate) fn record_invalid(&mut self) {
        self.records_decoded += 1;
        self.validation_errors += 1;
        self.error_count += 1;
        self.bytes_consumed += RECORD_SIZE as u64;
    }

    /// Count a one-byte resync step
    #[inline]
    pub(crate) fn record_resync(&mut self, cause: Error) {
        if cause.is_checksum() {
            self.checksum_errors += 1;
        } else {
            self.structural_errors += 1;
        }
        self.error_count += 1;
        self.bytes_consumed += 1;
    }

    /// Records decoded per second of decode time
    pub fn records_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.records_decoded as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for DecodingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} decoded, {} valid, {} errors ({} validation, {} structural, {} checksum), \
             {} bytes, {} truncated, {:.3}ms, {:.0} rec/sec",
            self.records_decoded,
            self.valid_records,
            self.error_count,
            self.validation_errors,
            self.structural_errors,
            self.checksum_errors,
            self.bytes_consumed,
            self.truncated_bytes,
            self.elapsed.as_secs_f64() * 1000.0,
            self.records_per_sec()
        )
    }
}
