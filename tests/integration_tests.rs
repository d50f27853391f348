//! Integration tests for tradewire
//!
//! These tests verify end-to-end decoding behaviour over clean, truncated and
//! corrupted buffers.

use tradewire::wire::{OFFSET_PRICE, OFFSET_QUANTITY, OFFSET_SIDE};
use tradewire::*;

fn record(seq: u32) -> TradeRecord {
    TradeRecord::new(
        seq,
        3045,
        1_700_000_000_000_000 + seq as u64 * 250,
        250_005,
        100 + seq,
        Side::Sell,
    )
}

fn concat(records: &[TradeRecord]) -> Vec<u8> {
    records.iter().flat_map(encode).collect()
}

fn sequences(records: &[TradeRecord]) -> Vec<u32> {
    records.iter().map(|r| r.sequence_number).collect()
}

#[test]
fn test_trailing_partial_record_is_not_an_error() {
    let mut buf = concat(&[record(1), record(2), record(3)]);
    buf.extend_from_slice(&[0u8; 10]);

    let (records, stats) = decode(&buf, ValidationLevel::Strict);

    assert_eq!(sequences(&records), vec![1, 2, 3]);
    assert_eq!(stats.truncated_bytes, 10);
    assert_eq!(stats.error_count, 0);
    assert_eq!(stats.bytes_consumed, 3 * RECORD_SIZE as u64);
}

#[test]
fn test_zeroed_record_resyncs_byte_by_byte() {
    let mut buf = concat(&[record(1), record(2), record(3)]);
    buf[RECORD_SIZE..RECORD_SIZE + SANITY_PREFIX_LEN].fill(0);

    let (records, stats) = decode(&buf, ValidationLevel::Checksum);

    assert_eq!(sequences(&records), vec![1, 3]);
    assert_eq!(stats.structural_errors, 1);
    // Every misaligned window between the two good records fails its CRC
    assert_eq!(stats.checksum_errors, (RECORD_SIZE - 1) as u64);
    assert_eq!(stats.error_count, RECORD_SIZE as u64);
    assert_eq!(stats.bytes_consumed, buf.len() as u64);
    assert_eq!(stats.truncated_bytes, 0);
}

#[test]
fn test_zeroed_record_under_strict_loses_alignment() {
    let mut buf = concat(&[record(1), record(2), record(3)]);
    buf[RECORD_SIZE..RECORD_SIZE + SANITY_PREFIX_LEN].fill(0);

    let (records, stats) = decode(&buf, ValidationLevel::Strict);

    // The window at offset 41 takes its side byte from reserved padding, parses,
    // fails validation and skips a full width, so record 3 ends up truncated
    assert_eq!(sequences(&records), vec![1]);
    assert_eq!(stats.records_decoded, 2);
    assert_eq!(stats.structural_errors, 1);
    assert_eq!(stats.validation_errors, 1);
    assert_eq!(stats.bytes_consumed, 2 * RECORD_SIZE as u64 + 1);
    assert_eq!(stats.truncated_bytes, (RECORD_SIZE - 1) as u64);
}

#[test]
fn test_bad_side_byte_only_checksum_level_realigns() {
    let mut buf = concat(&[record(1), record(2), record(3)]);
    buf[OFFSET_SIDE] = 2;

    let (strict, _) = decode(&buf, ValidationLevel::Strict);
    let (checksum, _) = decode(&buf, ValidationLevel::Checksum);

    assert!(strict.is_empty());
    assert_eq!(sequences(&checksum), vec![2, 3]);
}

#[test]
fn test_roundtrip_boundary_records() {
    let cases = [
        TradeRecord::new(1, 1, 1, 5, 1, Side::Buy),
        TradeRecord::new(u32::MAX, u32::MAX, u64::MAX, 10_000_000, 10_000_000, Side::Sell),
        TradeRecord::new(42, 11536, 1_700_000_000_000_000, 5, 10_000_000, Side::Sell),
    ];

    for expected in cases {
        let (records, stats) = decode(&encode(&expected), ValidationLevel::Checksum);
        assert_eq!(records, vec![expected]);
        assert_eq!(stats.valid_records, 1);
    }
}

#[test]
fn test_boundary_values_under_strict() {
    let invalid = [
        TradeRecord { price_minor_units: 4, ..record(1) },
        TradeRecord { price_minor_units: 10_000_001, ..record(1) },
        TradeRecord { quantity: 0, ..record(1) },
        TradeRecord { quantity: 10_000_001, ..record(1) },
        TradeRecord { sequence_number: 0, ..record(1) },
        TradeRecord { symbol_token: 0, ..record(1) },
    ];

    for bad in invalid {
        let (records, stats) = decode(&encode(&bad), ValidationLevel::Strict);
        assert!(records.is_empty(), "{:?} accepted", bad);
        assert_eq!(stats.validation_errors, 1);

        let (records, _) = decode(&encode(&bad), ValidationLevel::Lenient);
        assert_eq!(records, vec![bad]);
    }
}

#[test]
fn test_checksum_level_rejects_tampered_field() {
    let mut buf = concat(&[record(1)]);
    buf[OFFSET_PRICE] ^= 0x01;

    let (records, stats) = decode(&buf, ValidationLevel::Checksum);
    assert!(records.is_empty());
    assert_eq!(stats.checksum_errors, 1);
    assert_eq!(stats.truncated_bytes, (RECORD_SIZE - 1) as u64);

    // Without CRC checking the tampered price is accepted as-is
    let (records, _) = decode(&buf, ValidationLevel::Strict);
    assert_eq!(records[0].price_minor_units, 250_004);
}

#[test]
fn test_invalid_side_is_structural() {
    let mut buf = concat(&[record(1)]);
    buf[OFFSET_SIDE] = 7;

    for level in [ValidationLevel::Lenient, ValidationLevel::Strict] {
        let (records, stats) = decode(&buf, level);
        assert!(records.is_empty());
        assert_eq!(stats.structural_errors, 1);
        assert_eq!(stats.validation_errors, 0);
        assert_eq!(stats.records_decoded, 0);
    }
}

#[test]
fn test_semantic_reject_skips_whole_width() {
    let mut buf = concat(&[record(1), record(2), record(3)]);
    buf[RECORD_SIZE + OFFSET_QUANTITY..RECORD_SIZE + OFFSET_QUANTITY + 4]
        .copy_from_slice(&20_000_000u32.to_le_bytes());

    let (records, stats) = decode(&buf, ValidationLevel::Strict);
    assert_eq!(sequences(&records), vec![1, 3]);
    assert_eq!(stats.validation_errors, 1);
    assert_eq!(stats.structural_errors, 0);
    assert_eq!(stats.records_decoded, 3);
}

#[test]
fn test_garbage_prefix_then_records() {
    let mut buf = vec![0xFFu8; 7];
    buf.extend(concat(&[record(1), record(2)]));

    let (records, stats) = decode(&buf, ValidationLevel::Checksum);
    assert_eq!(sequences(&records), vec![1, 2]);
    assert_eq!(stats.error_count, 7);
    assert_eq!(stats.bytes_consumed, buf.len() as u64);
}

#[test]
fn test_decoder_accumulates_across_chunks() {
    let buf = concat(&[record(1), record(2), record(3), record(4)]);
    let mut decoder = FeedDecoder::new(ValidationLevel::Checksum);

    let first = decoder.decode(&buf[..2 * RECORD_SIZE]);
    let second = decoder.decode(&buf[2 * RECORD_SIZE..]);

    assert_eq!(sequences(&first), vec![1, 2]);
    assert_eq!(sequences(&second), vec![3, 4]);
    assert_eq!(decoder.stats().valid_records, 4);
    assert_eq!(decoder.stats().bytes_consumed, buf.len() as u64);

    decoder.reset();
    assert_eq!(decoder.stats().valid_records, 0);
    assert_eq!(decoder.stats().bytes_consumed, 0);
}

#[test]
fn test_generated_feed_with_corruption() {
    let config = FeedConfig::new(500).with_seed(2024).with_corruption(25);
    let mut generator = FeedGenerator::new(config).unwrap();
    let feed = generator.generate();

    let (records, stats) = decode(&feed, ValidationLevel::Checksum);

    // 25 overwrites damage at most 25 records
    assert!(records.len() >= 475);
    assert!(records.len() <= 500);
    assert!(records.iter().all(TradeRecord::is_valid));
    assert!(records
        .windows(2)
        .all(|w| w[0].sequence_number < w[1].sequence_number));
    assert_eq!(stats.bytes_consumed + stats.truncated_bytes, feed.len() as u64);
}

#[test]
fn test_symbol_lookup_collaborator() {
    let feed = FeedGenerator::new(FeedConfig::new(20).with_seed(5))
        .unwrap()
        .generate();
    let (records, _) = decode(&feed, ValidationLevel::Strict);

    let table = SymbolTable::nse_defaults();
    for r in &records {
        assert_ne!(table.symbol_name_or_unknown(r.symbol_token), "UNKNOWN");
    }

    let mut fixture = SymbolTable::new();
    fixture.insert(3045, "FIXTURE");
    assert_eq!(fixture.symbol_name(3045), Some("FIXTURE"));
    assert_eq!(fixture.symbol_name(1270), None);
}

#[test]
fn test_display_formats() {
    let line = record(9).to_string();
    assert!(line.contains("seq=9"));
    assert!(line.contains("price=2500.05"));
    assert!(line.contains("side=SELL"));

    let (_, stats) = decode(&concat(&[record(1)]), ValidationLevel::Strict);
    assert!(stats.to_string().starts_with("1 decoded, 1 valid, 0 errors"));

    assert_eq!(Error::CrcMismatch.to_string(), "CRC32 checksum verification failed");
}

#[cfg(feature = "serde")]
#[test]
fn test_config_serde() {
    let config: FeedConfig =
        serde_json::from_str(r#"{"record_count": 10, "seed": 3}"#).unwrap();
    assert_eq!(config.record_count, 10);
    assert_eq!(config.seed, 3);
    assert_eq!(config.corrupt_byte_count, 0);

    let level: ValidationLevel = serde_json::from_str(r#""checksum""#).unwrap();
    assert_eq!(level, ValidationLevel::Checksum);

    let json = serde_json::to_string(&record(1)).unwrap();
    let back: TradeRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record(1));
}
