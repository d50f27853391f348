//! Synthetic feed generator
//!
//! Produces a buffer of encoded records for exercising the decoder without a
//! live feed, optionally overwriting random bytes afterwards. A non-zero seed
//! makes the output fully reproducible, timestamps included.

use std::time::{SystemTime, UNIX_EPOCH};
use std::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::encoder::encode;
use crate::error::{Error, Result};
use crate::record::{Side, TradeRecord};
use crate::symbols::DEFAULT_SYMBOL_TOKENS;
use crate::RECORD_SIZE;

/// Lowest generated price, in minor units
pub const PRICE_BAND_LOW: u32 = 5_000;

/// Highest generated price, in minor units
pub const PRICE_BAND_HIGH: u32 = 800_000;

/// Generated prices are multiples of this many minor units
pub const PRICE_TICK: u32 = 5;

/// Largest generated quantity
pub const MAX_GENERATED_QUANTITY: u32 = 10_000;

/// Largest gap between consecutive timestamps, in microseconds
pub const MAX_TIMESTAMP_STEP_MICROS: u64 = 1_000;

/// First timestamp of a seeded feed when none is configured
/// (2023-11-14T22:13:20Z)
pub const SEEDED_EPOCH_MICROS: u64 = 1_700_000_000_000_000;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeedConfig {
    /// Number of records to emit (at least 1)
    pub record_count: usize,
    /// Number of random byte overwrites applied after encoding
    pub corrupt_byte_count: usize,
    /// RNG seed; 0 picks a fresh one
    pub seed: u64,
    /// First timestamp; defaults to now (seed 0) or [`SEEDED_EPOCH_MICROS`]
    pub start_timestamp_micros: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            record_count: 1000,
            corrupt_byte_count: 0,
            seed: 0,
            start_timestamp_micros: None,
        }
    }
}

impl FeedConfig {
    /// Clean feed of `record_count` records
    pub fn new(record_count: usize) -> Self {
        Self {
            record_count,
            ..Self::default()
        }
    }

    /// Set the seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of corrupted bytes
    pub fn with_corruption(mut self, corrupt_byte_count: usize) -> Self {
        self.corrupt_byte_count = corrupt_byte_count;
        self
    }

    /// Check the configuration
    pub fn validate(&self) -> Result<()> {
        if self.record_count == 0 {
            return Err(Error::InvalidConfig);
        }
        // Sequence numbers are u32 and start at 1
        if self.record_count > u32::MAX as usize {
            return Err(Error::InvalidConfig);
        }
        if let Some(start) = self.start_timestamp_micros {
            // Zero is an invalid timestamp; the last step must not overflow
            let span = (self.record_count as u64).checked_mul(MAX_TIMESTAMP_STEP_MICROS);
            if start == 0 || span.and_then(|s| start.checked_add(s)).is_none() {
                return Err(Error::InvalidConfig);
            }
        }
        Ok(())
    }
}

/// Seeded synthetic feed generator
#[derive(Debug, Clone)]
pub struct FeedGenerator {
    config: FeedConfig,
    seed: u64,
    rng: ChaCha8Rng,
    next_timestamp: u64,
}

impl FeedGenerator {
    /// Create a generator, resolving a zero seed to a random one
    pub fn new(config: FeedConfig) -> Result<Self> {
        config.validate()?;

        let seed = if config.seed == 0 {
            rand::thread_rng().gen_range(1..=u64::MAX)
        } else {
            config.seed
        };

        let next_timestamp = match (config.start_timestamp_micros, config.seed) {
            (Some(ts), _) => ts,
            (None, 0) => now_micros(),
            (None, _) => SEEDED_EPOCH_MICROS,
        };

        tracing::debug!(seed, records = config.record_count, "feed generator seeded");

        Ok(Self {
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_timestamp,
        })
    }

    /// Effective seed, for reproducing this feed later
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Configuration in use
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Generate the feed, applying the configured corruption
    pub fn generate(&mut self) -> Vec<u8> {
        let mut feed = self.generate_clean();
        self.corrupt(&mut feed);
        feed
    }

    /// Generate the feed without corruption
    pub fn generate_clean(&mut self) -> Vec<u8> {
        let mut feed = Vec::with_capacity(self.config.record_count * RECORD_SIZE);

        for seq in 1..=self.config.record_count {
            let record = self.next_record(seq as u32);
            feed.extend_from_slice(&encode(&record));
        }

        feed
    }

    fn next_record(&mut self, sequence_number: u32) -> TradeRecord {
        let symbol_token = DEFAULT_SYMBOL_TOKENS[self.rng.gen_range(0..DEFAULT_SYMBOL_TOKENS.len())];

        let timestamp_micros = self.next_timestamp;
        // Saturates only if generate() is called repeatedly near u64::MAX
        self.next_timestamp = self
            .next_timestamp
            .saturating_add(self.rng.gen_range(1..=MAX_TIMESTAMP_STEP_MICROS));

        let raw_price = self.rng.gen_range(PRICE_BAND_LOW..=PRICE_BAND_HIGH);
        let price_minor_units = (raw_price + PRICE_TICK / 2) / PRICE_TICK * PRICE_TICK;

        let quantity = self.rng.gen_range(1..=MAX_GENERATED_QUANTITY);
        let side = if self.rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };

        TradeRecord {
            sequence_number,
            symbol_token,
            timestamp_micros,
            price_minor_units,
            quantity,
            side,
        }
    }

    fn corrupt(&mut self, feed: &mut [u8]) {
        if feed.is_empty() {
            return;
        }

        for _ in 0..self.config.corrupt_byte_count {
            let pos = self.rng.gen_range(0..feed.len());
            let value: u8 = self.rng.gen();
            tracing::debug!(pos, old = feed[pos], new = value, "corrupting byte");
            feed[pos] = value;
        }
    }
}

fn now_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(SEEDED_EPOCH_MICROS)
}
