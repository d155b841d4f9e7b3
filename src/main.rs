//! Extrema Cache - command-line demo
//!
//! Inserts each argument into a bounded cache and reports what it retained.
//!
//! ```text
//! EXTREMA_POLICY=recompute EMIT_STATS=1 extrema_cache 5 3 8 1
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use extrema_cache::{print, BoundedOrderedCache, Config};

/// Number of values the demo cache retains.
const DEMO_CAPACITY: usize = 8;

/// Entry point for the demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Parse arguments as integers and insert them in order
/// 4. Print the retained values, newest first
/// 5. Log the tracked extremes and optionally print stats as JSON
fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extrema_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: extrema_policy={}, emit_stats={}",
        config.extrema_policy, config.emit_stats
    );

    let values = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("'{}' is not a valid integer", arg))
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        warn!("No values given; nothing to cache");
    }

    let mut cache: BoundedOrderedCache<i64, DEMO_CAPACITY> =
        BoundedOrderedCache::from_config(&config);
    for value in values {
        cache.insert(value);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print(&cache, &mut out).context("Failed to write cache contents")?;
    writeln!(out).context("Failed to write cache contents")?;

    match (cache.high(), cache.low()) {
        (Some(high), Some(low)) => info!(high, low, size = cache.size(), "Tracked extremes"),
        _ => info!("Cache never populated; extremes unset"),
    }

    if config.emit_stats {
        let json =
            serde_json::to_string_pretty(&cache.stats()).context("Failed to encode stats")?;
        writeln!(out, "{}", json).context("Failed to write stats")?;
    }

    Ok(())
}
