//! Record encoder
//!
//! Writes one record at a time into a fixed 40-byte block. Encoding cannot
//! fail: values outside the valid ranges are still written bit-for-bit,
//! validation belongs to the decoder.

use crate::crc32;
use crate::error::{Error, Result};
use crate::record::TradeRecord;
use crate::wire::{
    OFFSET_CHECKSUM, OFFSET_PRICE, OFFSET_QUANTITY, OFFSET_SEQUENCE, OFFSET_SIDE,
    OFFSET_SYMBOL_TOKEN, OFFSET_TIMESTAMP,
};
use crate::RECORD_SIZE;

/// Positional writer over one record block
pub struct RecordEncoder<'a> {
    buf: &'a mut [u8; RECORD_SIZE],
}

impl<'a> RecordEncoder<'a> {
    /// Create new encoder over the given block, zero-filling it
    #[inline]
    pub fn new(buf: &'a mut [u8; RECORD_SIZE]) -> Self {
        buf.fill(0);
        Self { buf }
    }

    /// Write a u8 value
    #[inline]
    pub fn put_u8(&mut self, offset: usize, value: u8) {
        self.buf[offset] = value;
    }

    /// Write a u32 value (little-endian)
    #[inline]
    pub fn put_u32(&mut self, offset: usize, value: u32) {
        self.buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    /// Write a u64 value (little-endian)
    #[inline]
    pub fn put_u64(&mut self, offset: usize, value: u64) {
        self.buf[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
    }

    /// Write every field of the record at its offset
    #[inline]
    pub fn put_record(&mut self, record: &TradeRecord) {
        self.put_u32(OFFSET_SEQUENCE, record.sequence_number);
        self.put_u32(OFFSET_SYMBOL_TOKEN, record.symbol_token);
        self.put_u64(OFFSET_TIMESTAMP, record.timestamp_micros);
        self.put_u32(OFFSET_PRICE, record.price_minor_units);
        self.put_u32(OFFSET_QUANTITY, record.quantity);
        self.put_u8(OFFSET_SIDE, record.side.as_wire());
    }

    /// Compute the CRC32 over the covered prefix and write it
    ///
    /// Returns the checksum written.
    #[inline]
    pub fn finish_crc32(&mut self) -> u32 {
        let crc = crc32::record_checksum(&*self.buf);
        self.put_u32(OFFSET_CHECKSUM, crc);
        crc
    }
}

/// Encode a record into a fresh block
#[inline]
pub fn encode(record: &TradeRecord) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    encode_block(record, &mut buf);
    buf
}

/// Encode a record into the first [`RECORD_SIZE`] bytes of `buf`
///
/// Returns the number of bytes written.
#[inline]
pub fn encode_into(record: &TradeRecord, buf: &mut [u8]) -> Result<usize> {
    let block: &mut [u8; RECORD_SIZE] = buf
        .get_mut(..RECORD_SIZE)
        .ok_or(Error::ShortBuffer)?
        .try_into()
        .map_err(|_| Error::ShortBuffer)?;

    encode_block(record, block);
    Ok(RECORD_SIZE)
}

#[inline]
fn encode_block(record: &TradeRecord, block: &mut [u8; RECORD_SIZE]) {
    let mut encoder = RecordEncoder::new(block);
    encoder.put_record(record);
    encoder.finish_crc32();
}
