//! RangeBench - cached vs. uncached range-sum workload driver

mod workload;

use anyhow::{bail, ensure, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rangecache::{CachedRangeArray, NonCachedArray};
use std::time::Instant;
use tracing::info;

use crate::workload::{generate_array, generate_ops, run};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Array size
    #[arg(short = 'n', long, default_value_t = 100_000)]
    size: usize,

    /// Number of operations
    #[arg(short, long, default_value_t = 50_000)]
    queries: usize,

    /// RNG seed
    #[arg(short, long, default_value_t = 50)]
    seed: u64,

    /// Cache capacity (number of range sums)
    #[arg(short, long, default_value_t = 1000)]
    capacity: usize,

    /// Fraction of operations that are range queries
    #[arg(long, default_value_t = 0.7)]
    range_ratio: f64,

    /// Largest generated value
    #[arg(long, default_value_t = 100)]
    max_value: i64,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    ensure!(
        (0.0..=1.0).contains(&args.range_ratio),
        "range ratio must be within 0.0..=1.0, got {}",
        args.range_ratio
    );
    ensure!(args.max_value >= 1, "max value must be at least 1");

    info!("Starting RangeBench v{}", env!("CARGO_PKG_VERSION"));
    info!("Array size: {}", args.size);
    info!("Operations: {}", args.queries);
    info!("Seed: {}", args.seed);
    info!("Cache capacity: {}", args.capacity);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let values = generate_array(&mut rng, args.size, args.max_value);
    let ops = generate_ops(
        &mut rng,
        args.size,
        args.queries,
        args.range_ratio,
        args.max_value,
    );

    let mut plain = NonCachedArray::new(values.clone());
    let start = Instant::now();
    let expected = run(&mut plain, &ops)?;
    let time_no_cache = start.elapsed();

    let mut cached = CachedRangeArray::new(values, args.capacity)?;
    let start = Instant::now();
    let actual = run(&mut cached, &ops)?;
    let time_cache = start.elapsed();

    if expected != actual {
        bail!("cached results diverged from the uncached baseline");
    }

    let stats = cached.stats();
    info!("Without cache: {:.2?}", time_no_cache);
    info!("With LRU cache: {:.2?}", time_cache);
    info!(
        "Cache hits: {}, misses: {}, hit ratio: {:.2}",
        stats.hits(),
        stats.misses(),
        stats.hit_ratio()
    );
    info!(
        "Cache evictions: {}, invalidations: {}",
        stats.evictions(),
        stats.invalidations()
    );

    Ok(())
}
