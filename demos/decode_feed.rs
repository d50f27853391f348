//! Generate a synthetic feed, decode it and log the results
//!
//! Run with: RUST_LOG=info cargo run --example decode_feed -- [count] [corrupt] [seed]

use tracing::info;
use tracing_subscriber::EnvFilter;
use tradewire::{
    FeedConfig, FeedDecoder, FeedGenerator, SymbolLookup, SymbolTable, ValidationLevel,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let count: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(1000);
    let corrupt: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(count / 20);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(0);

    let config = FeedConfig::new(count).with_seed(seed).with_corruption(corrupt);
    let mut generator = FeedGenerator::new(config)?;
    let feed = generator.generate();
    info!(bytes = feed.len(), seed = generator.seed(), "generated feed");

    let symbols = SymbolTable::nse_defaults();

    for level in [
        ValidationLevel::Lenient,
        ValidationLevel::Strict,
        ValidationLevel::Checksum,
    ] {
        let mut decoder = FeedDecoder::new(level);
        let records = decoder.decode(&feed);

        for record in records.iter().take(3) {
            info!(
                level = ?level,
                symbol = symbols.symbol_name_or_unknown(record.symbol_token),
                "{}",
                record
            );
        }
        info!(level = ?level, "{}", decoder.stats());
    }

    Ok(())
}
