//! Resynchronizing feed decoder
//!
//! The decoder walks a byte buffer one record width at a time. A record that
//! fails structurally moves the cursor forward by a single byte so the next
//! record boundary can be found again; a record that parses but fails
//! validation still consumes its full width. Malformed input never surfaces
//! as an error to the caller, only through [`DecodingStats`] and omission.

use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::time::Instant;

use crate::crc32;
use crate::error::{Error, Result};
use crate::record::{Side, TradeRecord, ValidationLevel};
use crate::stats::DecodingStats;
use crate::wire::{
    OFFSET_CHECKSUM, OFFSET_PRICE, OFFSET_QUANTITY, OFFSET_SEQUENCE, OFFSET_SIDE,
    OFFSET_SYMBOL_TOKEN, OFFSET_TIMESTAMP,
};
use crate::{RECORD_SIZE, SANITY_PREFIX_LEN};

/// Cursor for reading fields out of one record block
#[derive(Debug)]
pub struct RecordCursor<'a> {
    buf: &'a [u8; RECORD_SIZE],
}

impl<'a> RecordCursor<'a> {
    /// Create a cursor over the first [`RECORD_SIZE`] bytes of `buf`
    #[inline]
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        let buf: &'a [u8; RECORD_SIZE] = buf
            .get(..RECORD_SIZE)
            .ok_or(Error::UnexpectedEof)?
            .try_into()
            .map_err(|_| Error::UnexpectedEof)?;
        Ok(Self { buf })
    }

    /// The whole record block
    #[inline]
    pub fn block(&self) -> &'a [u8; RECORD_SIZE] {
        self.buf
    }

    /// Read a u8 value
    #[inline]
    pub fn get_u8(&self, offset: usize) -> u8 {
        self.buf[offset]
    }

    /// Read a u32 value (little-endian)
    #[inline]
    pub fn get_u32(&self, offset: usize) -> u32 {
        u32::from_le_bytes([
            self.buf[offset],
            self.buf[offset + 1],
            self.buf[offset + 2],
            self.buf[offset + 3],
        ])
    }

    /// Read a u64 value (little-endian)
    #[inline]
    pub fn get_u64(&self, offset: usize) -> u64 {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.buf[offset..offset + 8]);
        u64::from_le_bytes(bytes)
    }

    /// Whether the sanity prefix is entirely zero
    #[inline]
    pub fn is_zeroed(&self) -> bool {
        self.buf[..SANITY_PREFIX_LEN].iter().all(|&b| b == 0)
    }
}

/// A structurally parsed record together with its on-wire checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireRecord {
    /// Decoded fields
    pub record: TradeRecord,
    /// Checksum field as stored on the wire
    pub checksum: u32,
}

/// Structurally parse one record from the start of `buf`
///
/// Rejects a zeroed prefix, a CRC mismatch (only when `level` checks the
/// checksum) and an unknown side byte, in that order. Field ranges are not
/// checked here.
pub fn parse_record(buf: &[u8], level: ValidationLevel) -> Result<WireRecord> {
    let cursor = RecordCursor::new(buf)?;

    if cursor.is_zeroed() {
        return Err(Error::ZeroedRecord);
    }

    let checksum = cursor.get_u32(OFFSET_CHECKSUM);
    if level.checks_checksum() && !crc32::verify_crc32(&cursor.block()[..OFFSET_CHECKSUM], checksum)
    {
        return Err(Error::CrcMismatch);
    }

    let record = TradeRecord {
        sequence_number: cursor.get_u32(OFFSET_SEQUENCE),
        symbol_token: cursor.get_u32(OFFSET_SYMBOL_TOKEN),
        timestamp_micros: cursor.get_u64(OFFSET_TIMESTAMP),
        price_minor_units: cursor.get_u32(OFFSET_PRICE),
        quantity: cursor.get_u32(OFFSET_QUANTITY),
        side: Side::from_wire(cursor.get_u8(OFFSET_SIDE))?,
    };

    Ok(WireRecord { record, checksum })
}

/// Stateful decoder that accumulates [`DecodingStats`] across calls
///
/// Not meant to be shared between threads; use one instance per stream.
#[derive(Debug, Clone, Default)]
pub struct FeedDecoder {
    level: ValidationLevel,
    stats: DecodingStats,
}

impl FeedDecoder {
    /// Create new decoder with the given validation level
    #[inline]
    pub fn new(level: ValidationLevel) -> Self {
        Self {
            level,
            stats: DecodingStats::new(),
        }
    }

    /// Current validation level
    #[inline]
    pub fn validation_level(&self) -> ValidationLevel {
        self.level
    }

    /// Change the validation level for subsequent calls
    #[inline]
    pub fn set_validation_level(&mut self, level: ValidationLevel) {
        self.level = level;
    }

    /// Cumulative stats since construction or the last reset
    #[inline]
    pub fn stats(&self) -> &DecodingStats {
        &self.stats
    }

    /// Clear cumulative stats
    #[inline]
    pub fn reset(&mut self) {
        self.stats = DecodingStats::new();
    }

    /// Decode every record in `buf`, returning only the accepted ones
    pub fn decode(&mut self, buf: &[u8]) -> Vec<TradeRecord> {
        #[cfg(feature = "std")]
        let start = Instant::now();

        let mut records = Vec::with_capacity(buf.len() / RECORD_SIZE);
        let mut pos = 0;

        while buf.len() - pos >= RECORD_SIZE {
            match parse_record(&buf[pos..], self.level) {
                Ok(WireRecord { record, .. }) => {
                    match self.validate(&record) {
                        Ok(()) => {
                            records.push(record);
                            self.stats.record_valid();
                        }
                        Err(e) => {
                            tracing::trace!(offset = pos, error = e.description(), "record rejected");
                            self.stats.record_invalid();
                        }
                    }
                    pos += RECORD_SIZE;
                }
                Err(e) => {
                    tracing::trace!(offset = pos, error = e.description(), "resync");
                    self.stats.record_resync(e);
                    pos += 1;
                }
            }
        }

        self.stats.truncated_bytes = (buf.len() - pos) as u64;

        #[cfg(feature = "std")]
        {
            self.stats.elapsed += start.elapsed();
        }

        tracing::debug!(
            bytes = buf.len(),
            accepted = records.len(),
            truncated = self.stats.truncated_bytes,
            errors = self.stats.error_count,
            "decoded buffer"
        );

        records
    }

    #[inline]
    fn validate(&self, record: &TradeRecord) -> Result<()> {
        if self.level.checks_semantics() {
            record.validate()
        } else {
            Ok(())
        }
    }
}

/// Decode `buf` with a fresh decoder
///
/// Returns the accepted records and the stats for this buffer alone.
pub fn decode(buf: &[u8], level: ValidationLevel) -> (Vec<TradeRecord>, DecodingStats) {
    let mut decoder = FeedDecoder::new(level);
    let records = decoder.decode(buf);
    (records, *decoder.stats())
}
