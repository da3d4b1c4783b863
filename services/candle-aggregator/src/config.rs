//! Candle aggregator configuration

use crate::BucketWidth;
use serde::{Deserialize, Serialize};

/// Price derivation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationPolicy {
    /// Derive prices from token/native balance deltas; synthesize a
    /// placeholder series when no record yields a price
    BalanceDelta,
    /// Use the network fee as the price proxy; no fallback, an empty
    /// series is a legitimate outcome
    FeeOnly,
}

/// Candle aggregator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Price derivation policy
    pub policy: AggregationPolicy,

    /// Bucket width of the output grid
    pub bucket_width: BucketWidth,

    /// Lower bound of the accepted price band (exclusive)
    pub min_price: f64,

    /// Upper bound of the accepted price band (exclusive)
    pub max_price: f64,

    /// Maximum fractional close-to-close move before the jump clamp
    /// engages (0.5 = 50%)
    pub max_step_change: f64,

    /// Synthetic fallback series parameters
    pub synthetic: SyntheticConfig,
}

/// Synthetic fallback series configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Base price the walk is centered on
    pub base_price: f64,

    /// Fractional volatility of the walk (0.1 = 10%)
    pub volatility: f64,

    /// Lower edge of the per-candle volume draw
    pub volume_floor: f64,

    /// Width of the per-candle volume draw
    pub volume_spread: f64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            policy: AggregationPolicy::BalanceDelta,
            bucket_width: BucketWidth::Hourly,
            // Band bounds are empirically chosen sanity checks, not verified
            // market invariants; keep them tunable.
            min_price: 0.0,
            max_price: 1000.0,
            max_step_change: 0.5,
            synthetic: SyntheticConfig::default(),
        }
    }
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            base_price: 1.0,
            volatility: 0.1,
            volume_floor: 1000.0,
            volume_spread: 1000.0,
        }
    }
}
