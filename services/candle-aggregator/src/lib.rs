//! Candle Aggregator
//!
//! Converts batches of Solana transaction records into time-bucketed
//! OHLCV candle series for charting:
//! - Hourly and half-hourly bucket grids
//! - Price derivation from token/native balance deltas or network fees
//! - Outlier suppression (price band, inter-bucket jump clamp)
//! - Synthetic placeholder series when no real price data is derivable

pub mod aggregators;
pub mod config;
pub mod errors;
pub mod record;
pub mod view;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub use aggregators::CandleAggregator;
pub use config::{AggregationPolicy, AggregatorConfig, SyntheticConfig};
pub use errors::RecordError;
pub use record::{TokenBalance, TransactionMeta, TransactionRecord, UiTokenAmount};

/// Width of one bucket in the output grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketWidth {
    /// 60 minute buckets
    Hourly,
    /// 30 minute buckets
    HalfHourly,
}

impl BucketWidth {
    /// Get duration in seconds
    pub fn duration_seconds(&self) -> i64 {
        match self {
            BucketWidth::Hourly => 3600,
            BucketWidth::HalfHourly => 1800,
        }
    }

    /// Get chrono duration
    pub fn to_duration(&self) -> Duration {
        Duration::seconds(self.duration_seconds())
    }

    /// Truncate a Unix-seconds timestamp to the start of its bucket.
    ///
    /// Hourly zeroes minutes and seconds; half-hourly floors minutes to
    /// the nearest 0 or 30 and zeroes seconds.
    pub fn truncate_secs(&self, unix_secs: i64) -> i64 {
        unix_secs - unix_secs.rem_euclid(self.duration_seconds())
    }
}

/// Provenance of an output series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// Derived from actual transaction records
    Real,
    /// Placeholder walk generated because no record yielded a price
    Synthetic,
}

/// OHLCV candle for one bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket start instant (serialized as ISO-8601 for the chart renderer)
    pub time: DateTime<Utc>,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume proxy
    pub value: f64,
    #[serde(skip)]
    touched: bool,
}

impl Candle {
    /// Create an empty candle at the given bucket start
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            time,
            open: 0.0,
            high: 0.0,
            low: f64::INFINITY, // Will be updated on first price
            close: 0.0,
            value: 0.0,
            touched: false,
        }
    }

    /// Update candle with a record's derived price.
    ///
    /// `weight` is the number of balance-change pairs that contributed to
    /// the price (1 in fee-only mode); volume scales with it.
    pub fn apply_price(&mut self, price: f64, weight: usize) {
        if !self.touched {
            self.open = price;
            self.touched = true;
        }
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
        self.value += price * weight as f64;
    }

    /// Whether any price has been placed in this bucket
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Bucket start as an ISO-8601 string
    pub fn time_iso(&self) -> String {
        self.time.to_rfc3339()
    }

    pub(crate) fn mark_touched(&mut self) {
        self.touched = true;
    }
}

/// Ordered candle sequence plus how it was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    /// Candles ascending by bucket start
    pub candles: Vec<Candle>,
    /// Real ledger-derived data or synthetic placeholder
    pub provenance: Provenance,
}

impl CandleSeries {
    /// Number of candles
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// True when the series holds no candles
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// True when the series is a synthetic placeholder
    pub fn is_synthetic(&self) -> bool {
        self.provenance == Provenance::Synthetic
    }
}
