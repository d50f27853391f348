//! CRC32 (IEEE 802.3, reflected) used for record integrity verification
//!
//! Byte-at-a-time, table-free: each input byte is folded into the low byte of
//! the accumulator and then shifted out one bit at a time.

use crate::{CHECKSUM_COVERAGE, CHECKSUM_OFFSET, RECORD_SIZE};

/// CRC32 polynomial (reflected form of 0x04C11DB7)
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// Compute the CRC32 checksum of the given data
#[inline]
pub const fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    let mut i = 0;

    while i < data.len() {
        crc ^= data[i] as u32;

        let mut bit = 0;
        while bit < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC32_POLYNOMIAL;
            } else {
                crc >>= 1;
            }
            bit += 1;
        }

        i += 1;
    }

    !crc
}

/// Verify CRC32 checksum against expected value
#[inline]
pub fn verify_crc32(data: &[u8], expected: u32) -> bool {
    crc32(data) == expected
}

/// Checksum over the covered prefix of one encoded record
///
/// Everything except the trailing checksum field is covered.
#[inline]
pub fn record_checksum(record: &[u8; RECORD_SIZE]) -> u32 {
    crc32(&record[..CHECKSUM_COVERAGE])
}

/// Checksum stored in the trailing field of one encoded record
#[inline]
pub fn stored_checksum(record: &[u8; RECORD_SIZE]) -> u32 {
    u32::from_le_bytes([
        record[CHECKSUM_OFFSET],
        record[CHECKSUM_OFFSET + 1],
        record[CHECKSUM_OFFSET + 2],
        record[CHECKSUM_OFFSET + 3],
    ])
}
