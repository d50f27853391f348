//! Error types for the trade record codec

/// Errors that can occur while encoding, parsing or validating a record
///
/// The decoder never returns these to its caller; it uses them to pick the
/// counter to bump and whether to resynchronize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Output buffer too small for one record
    ShortBuffer,
    /// Fewer than one record's worth of bytes available
    ///
    /// Only `parse_record` and `RecordCursor::new` on a short slice return
    /// this. The decode loop stops before it and reports the tail as
    /// truncated, so it never causes a resync.
    UnexpectedEof,
    /// First 16 bytes of the record are all zero
    ZeroedRecord,
    /// Side byte is neither buy nor sell
    InvalidSide,
    /// CRC32 checksum mismatch
    CrcMismatch,
    /// Sequence number is zero
    InvalidSequence,
    /// Symbol token is zero
    InvalidSymbolToken,
    /// Timestamp is zero
    InvalidTimestamp,
    /// Price below the minimum tick
    PriceBelowTick,
    /// Price above the upper circuit limit
    PriceAboveCircuit,
    /// Quantity is zero
    InvalidQuantity,
    /// Quantity above the per-trade limit
    QuantityAboveLimit,
    /// Generator or decoder configuration rejected
    InvalidConfig,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::ShortBuffer => "buffer too small for one record",
            Error::UnexpectedEof => "not enough bytes for a full record",
            Error::ZeroedRecord => "record prefix is all zero",
            Error::InvalidSide => "invalid trade side byte",
            Error::CrcMismatch => "CRC32 checksum verification failed",
            Error::InvalidSequence => "invalid sequence number",
            Error::InvalidSymbolToken => "invalid symbol token",
            Error::InvalidTimestamp => "invalid timestamp",
            Error::PriceBelowTick => "price below minimum tick size",
            Error::PriceAboveCircuit => "price exceeds upper circuit limit",
            Error::InvalidQuantity => "invalid quantity",
            Error::QuantityAboveLimit => "quantity exceeds maximum limit",
            Error::InvalidConfig => "invalid configuration",
        }
    }

    /// Malformed bytes that trigger a single-byte resync
    ///
    /// Checksum mismatches are structural too, but have their own counter.
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEof | Error::ZeroedRecord | Error::InvalidSide | Error::CrcMismatch
        )
    }

    /// True only for a CRC32 mismatch
    pub const fn is_checksum(&self) -> bool {
        matches!(self, Error::CrcMismatch)
    }

    /// Well-formed record whose field values are out of range
    pub const fn is_semantic(&self) -> bool {
        matches!(
            self,
            Error::InvalidSequence
                | Error::InvalidSymbolToken
                | Error::InvalidTimestamp
                | Error::PriceBelowTick
                | Error::PriceAboveCircuit
                | Error::InvalidQuantity
                | Error::QuantityAboveLimit
        )
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for codec operations
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes_are_disjoint() {
        let all = [
            Error::ShortBuffer,
            Error::UnexpectedEof,
            Error::ZeroedRecord,
            Error::InvalidSide,
            Error::CrcMismatch,
            Error::InvalidSequence,
            Error::InvalidSymbolToken,
            Error::InvalidTimestamp,
            Error::PriceBelowTick,
            Error::PriceAboveCircuit,
            Error::InvalidQuantity,
            Error::QuantityAboveLimit,
            Error::InvalidConfig,
        ];

        for err in all {
            assert!(!(err.is_structural() && err.is_semantic()), "{:?}", err);
            assert!(!err.description().is_empty());
        }

        assert!(Error::CrcMismatch.is_structural());
        assert!(Error::CrcMismatch.is_checksum());
        assert!(!Error::InvalidSide.is_checksum());
        assert!(!Error::ShortBuffer.is_structural());
        assert!(!Error::InvalidConfig.is_semantic());
    }
}
