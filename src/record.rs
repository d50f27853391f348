//! Trade record data model and semantic validation

use crate::error::{Error, Result};

/// Minimum tick, in minor units
pub const MIN_PRICE_MINOR_UNITS: u32 = 5;

/// Upper circuit limit, in minor units
pub const MAX_PRICE_MINOR_UNITS: u32 = 10_000_000;

/// Smallest tradable quantity
pub const MIN_QUANTITY: u32 = 1;

/// Largest tradable quantity
pub const MAX_QUANTITY: u32 = 10_000_000;

/// Minor units per major currency unit
pub const MINOR_UNITS_PER_MAJOR: u32 = 100;

/// Aggressor side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Side {
    /// Buyer-initiated
    #[default]
    Buy = 0,
    /// Seller-initiated
    Sell = 1,
}

impl Side {
    /// Map an on-wire side byte
    #[inline]
    pub const fn from_wire(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Side::Buy),
            1 => Ok(Side::Sell),
            _ => Err(Error::InvalidSide),
        }
    }

    /// On-wire side byte
    #[inline]
    pub const fn as_wire(self) -> u8 {
        self as u8
    }

    /// Upper-case label
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strictness applied to a structurally parsed record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValidationLevel {
    /// Accept anything that parses
    Lenient,
    /// Enforce field ranges
    #[default]
    Strict,
    /// Enforce field ranges and the CRC32 trailer
    Checksum,
}

impl ValidationLevel {
    /// Range/non-zero checks run at this level
    #[inline]
    pub const fn checks_semantics(self) -> bool {
        !matches!(self, ValidationLevel::Lenient)
    }

    /// CRC32 is recomputed and compared at this level
    #[inline]
    pub const fn checks_checksum(self) -> bool {
        matches!(self, ValidationLevel::Checksum)
    }
}

/// One decoded trade event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeRecord {
    /// Message sequence number
    pub sequence_number: u32,
    /// Opaque instrument identifier
    pub symbol_token: u32,
    /// Event time, microseconds since the epoch
    pub timestamp_micros: u64,
    /// Price in 1/100 of the major currency unit
    pub price_minor_units: u32,
    /// Traded quantity
    pub quantity: u32,
    /// Aggressor side
    pub side: Side,
}

impl TradeRecord {
    /// Create a new trade record
    #[inline]
    pub const fn new(
        sequence_number: u32,
        symbol_token: u32,
        timestamp_micros: u64,
        price_minor_units: u32,
        quantity: u32,
        side: Side,
    ) -> Self {
        Self {
            sequence_number,
            symbol_token,
            timestamp_micros,
            price_minor_units,
            quantity,
            side,
        }
    }

    /// Check the range and non-zero invariants
    ///
    /// Returns the first violation found.
    pub const fn validate(&self) -> Result<()> {
        if self.sequence_number == 0 {
            return Err(Error::InvalidSequence);
        }
        if self.symbol_token == 0 {
            return Err(Error::InvalidSymbolToken);
        }
        if self.timestamp_micros == 0 {
            return Err(Error::InvalidTimestamp);
        }
        if self.price_minor_units < MIN_PRICE_MINOR_UNITS {
            return Err(Error::PriceBelowTick);
        }
        if self.quantity < MIN_QUANTITY {
            return Err(Error::InvalidQuantity);
        }
        if self.price_minor_units > MAX_PRICE_MINOR_UNITS {
            return Err(Error::PriceAboveCircuit);
        }
        if self.quantity > MAX_QUANTITY {
            return Err(Error::QuantityAboveLimit);
        }
        Ok(())
    }

    /// Whether [`validate`](Self::validate) passes
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Price in major currency units, for display only
    #[inline]
    pub fn price_major(&self) -> f64 {
        self.price_minor_units as f64 / MINOR_UNITS_PER_MAJOR as f64
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "seq={} token={} ts_us={} price={:.2} qty={} side={}",
            self.sequence_number,
            self.symbol_token,
            self.timestamp_micros,
            self.price_major(),
            self.quantity,
            self.side
        )
    }
}
