use std::{hint::black_box, time::Instant};

use clap::Parser;
use oorandom::Rand32;
use tracing::Level as LogLevel;
use tracing_subscriber::EnvFilter;

use ranked_skiplist::{DefaultComparator, RankedSkiplist, SkiplistError};


/// Time random insertions, lookups, rank queries and removals on a ranked skiplist of `u32`s.
///
/// Results are logged at the `info` level; set `RUST_LOG` to see more or less.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of entries in each run.
    #[arg(long, value_delimiter = ',', default_values_t = [10_000, 100_000, 1_000_000])]
    sizes: Vec<u32>,

    /// Seed for the shuffles and for node heights.
    #[arg(long, default_value_t = 0x_5eed)]
    seed: u64,
}

fn main() -> Result<(), SkiplistError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    tracing::event!(LogLevel::DEBUG, ?args, "starting rank benchmark");

    for &size in &args.sizes {
        run(size, args.seed)?;
    }

    Ok(())
}

#[expect(clippy::as_conversions, reason = "usize is at least 32 bits on supported targets")]
const fn to_index(value: u32) -> usize {
    value as usize
}

fn shuffled(size: u32, prng: &mut Rand32) -> Vec<u32> {
    let mut nums: Vec<u32> = (0..size).collect();

    for i in 0..size.saturating_sub(1) {
        let swap_with = prng.rand_range(i + 1..size);
        nums.swap(to_index(i), to_index(swap_with));
    }

    nums
}

fn run(size: u32, seed: u64) -> Result<(), SkiplistError> {
    if size == 0 {
        tracing::event!(LogLevel::WARN, "skipping a run with no entries");
        return Ok(());
    }

    let mut prng = Rand32::new(seed);
    let nums = shuffled(size, &mut prng);
    let mut list = RankedSkiplist::new_seeded(DefaultComparator, seed);

    let start = Instant::now();
    for &num in &nums {
        list.insert(num);
    }

    let inserted = Instant::now();
    for _ in 0..size {
        let index = to_index(prng.rand_range(0..size));
        let _entry = black_box(list.at(index)?);
    }

    let queried_by_index = Instant::now();
    for num in &nums {
        let _cursor = black_box(list.find(num));
    }

    let queried_by_entry = Instant::now();
    for num in &nums {
        let _index = black_box(list.index_of(num));
    }

    let queried_index_of = Instant::now();
    for num in &nums {
        let mut cursor = list.find(num);
        let _removed = list.remove_at(&mut cursor)?;
    }
    let removed = Instant::now();

    assert!(list.is_empty(), "every inserted entry should have been removed");

    let phases = [
        ("random insert",                inserted - start),
        ("random query by index",        queried_by_index - inserted),
        ("random query by entry",        queried_by_entry - queried_by_index),
        ("random query index of entry",  queried_index_of - queried_by_entry),
        ("random delete",                removed - queried_index_of),
    ];

    for (phase, elapsed) in phases {
        tracing::event!(
            LogLevel::INFO,
            "{size} elements {phase}, timespan={}ms",
            elapsed.as_millis(),
        );
    }

    Ok(())
}
