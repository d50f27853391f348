//! Record layout: byte offsets and widths of every field
//!
//! ```text
//! 0        4        8                16       20       24 25          36       40
//! +--------+--------+----------------+--------+--------+--+-----------+--------+
//! | seq u32| tok u32| ts_us u64      | px u32 | qty u32|sd| reserved  | crc u32|
//! +--------+--------+----------------+--------+--------+--+-----------+--------+
//! ```
//!
//! All multi-byte integers are little-endian.

use crate::RECORD_SIZE;

/// Sequence number offset
pub const OFFSET_SEQUENCE: usize = 0;
/// Symbol token offset
pub const OFFSET_SYMBOL_TOKEN: usize = 4;
/// Timestamp (microseconds) offset
pub const OFFSET_TIMESTAMP: usize = 8;
/// Price (minor units) offset
pub const OFFSET_PRICE: usize = 16;
/// Quantity offset
pub const OFFSET_QUANTITY: usize = 20;
/// Side byte offset
pub const OFFSET_SIDE: usize = 24;
/// First reserved padding byte
pub const OFFSET_RESERVED: usize = 25;
/// Checksum offset
pub const OFFSET_CHECKSUM: usize = 36;

/// Reserved padding width
pub const RESERVED_LEN: usize = OFFSET_CHECKSUM - OFFSET_RESERVED;

/// One field of the record layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field name
    pub name: &'static str,
    /// Byte offset from the record start
    pub offset: usize,
    /// Width in bytes
    pub width: usize,
}

impl FieldLayout {
    /// One past the last byte of the field
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }
}

/// Every field in wire order, padding included
pub const FIELDS: [FieldLayout; 8] = [
    FieldLayout { name: "sequence_number", offset: OFFSET_SEQUENCE, width: 4 },
    FieldLayout { name: "symbol_token", offset: OFFSET_SYMBOL_TOKEN, width: 4 },
    FieldLayout { name: "timestamp_micros", offset: OFFSET_TIMESTAMP, width: 8 },
    FieldLayout { name: "price_minor_units", offset: OFFSET_PRICE, width: 4 },
    FieldLayout { name: "quantity", offset: OFFSET_QUANTITY, width: 4 },
    FieldLayout { name: "side", offset: OFFSET_SIDE, width: 1 },
    FieldLayout { name: "reserved", offset: OFFSET_RESERVED, width: RESERVED_LEN },
    FieldLayout { name: "checksum", offset: OFFSET_CHECKSUM, width: 4 },
];

/// Look up a field by name
pub fn field(name: &str) -> Option<FieldLayout> {
    FIELDS.iter().copied().find(|f| f.name == name)
}

const _: () = assert!(FIELDS[FIELDS.len() - 1].end() == RECORD_SIZE);
