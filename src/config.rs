//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use tracing::warn;

use crate::cache::ExtremaPolicy;

/// Cache configuration parameters.
///
/// Capacity is a compile-time parameter of the cache and is not configured
/// here. All values can be set via environment variables with sensible
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How high/low react when entries are popped or evicted
    pub extrema_policy: ExtremaPolicy,
    /// Whether the demo binary prints a JSON stats snapshot
    pub emit_stats: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `EXTREMA_POLICY` - `historical` or `recompute` (default: historical)
    /// - `EMIT_STATS` - `true`/`false`/`1`/`0` (default: false)
    ///
    /// Unparseable values fall back to their defaults with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let extrema_policy = match lookup("EXTREMA_POLICY") {
            Some(raw) => raw.parse::<ExtremaPolicy>().unwrap_or_else(|err| {
                warn!("{}; using {}", err, defaults.extrema_policy);
                defaults.extrema_policy
            }),
            None => defaults.extrema_policy,
        };

        let emit_stats = match lookup("EMIT_STATS") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!("Invalid EMIT_STATS value '{}'; using {}", raw, defaults.emit_stats);
                defaults.emit_stats
            }),
            None => defaults.emit_stats,
        };

        Self {
            extrema_policy,
            emit_stats,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extrema_policy: ExtremaPolicy::Historical,
            emit_stats: false,
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
