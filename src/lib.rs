//! tradewire: fixed-layout binary trade record codec
//!
//! This crate decodes a stream of fixed 40-byte trade records into structured
//! values, and encodes records into the same format. The decoder keeps making
//! progress over corrupted input by resynchronizing one byte at a time.
//!
//! # Record Format
//!
//! ```text
//! +----------+----------+---------------+----------+----------+------+-------------+----------+
//! | Seq u32  | Token u32| TsMicros u64  | Price u32| Qty u32  | Side | Reserved 11 | CRC32 u32|
//! +----------+----------+---------------+----------+----------+------+-------------+----------+
//! ```
//!
//! Little-endian throughout. The CRC32 (reflected, polynomial `0xEDB88320`)
//! covers bytes `[0, 36)`.
//!
//! # Features
//!
//! - Explicit per-field little-endian extraction, no raw memory casts
//! - Structural errors (zeroed prefix, bad side, CRC mismatch) resync by one byte
//! - Semantic errors (out-of-range fields) drop the record and skip its width
//! - Three validation levels: lenient, strict, checksum
//! - Seeded synthetic feed generator with byte-level corruption (`std`)
//! - `no_std` support with `alloc`
//!
//! # Example
//!
//! ```rust
//! use tradewire::*;
//!
//! let record = TradeRecord::new(1, 3045, 1_700_000_000_000_000, 250_005, 100, Side::Buy);
//! let bytes = encode(&record);
//! assert_eq!(bytes.len(), RECORD_SIZE);
//!
//! let (records, stats) = decode(&bytes, ValidationLevel::Checksum);
//! assert_eq!(records, [record]);
//! assert_eq!(stats.error_count, 0);
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod crc32;
pub mod decoder;
pub mod encoder;
pub mod error;
#[cfg(feature = "std")]
pub mod generator;
pub mod record;
pub mod stats;
pub mod symbols;
pub mod wire;

// Re-export main types
pub use decoder::{decode, parse_record, FeedDecoder, RecordCursor, WireRecord};
pub use encoder::{encode, encode_into, RecordEncoder};
pub use error::Error;
#[cfg(feature = "std")]
pub use generator::{FeedConfig, FeedGenerator};
pub use record::{Side, TradeRecord, ValidationLevel};
pub use stats::DecodingStats;
pub use symbols::{SymbolLookup, SymbolTable};

/// Size of one encoded record in bytes
pub const RECORD_SIZE: usize = 40;

/// Offset of the trailing checksum field
pub const CHECKSUM_OFFSET: usize = RECORD_SIZE - 4;

/// Number of leading bytes covered by the checksum
pub const CHECKSUM_COVERAGE: usize = CHECKSUM_OFFSET;

/// Leading bytes that must not all be zero in a well-formed record
pub const SANITY_PREFIX_LEN: usize = 16;
