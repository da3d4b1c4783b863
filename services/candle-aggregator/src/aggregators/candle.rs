//! Transaction-to-candle aggregation engine
//!
//! Stateless, synchronous pipeline: build the bucket grid for the
//! requested window, scan the records in input order, then either
//! post-process the touched buckets or synthesize a placeholder series.

use crate::aggregators::{postprocess, price, synthetic};
use crate::config::{AggregationPolicy, AggregatorConfig};
use crate::record::TransactionRecord;
use crate::{Candle, CandleSeries, Provenance};
use chrono::{DateTime, Utc};
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Candle aggregation engine
#[derive(Debug, Clone, Default)]
pub struct CandleAggregator {
    config: AggregatorConfig,
}

impl CandleAggregator {
    /// Create an engine with the given configuration
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Engine configuration
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Aggregate a batch of records into a candle series covering the
    /// last `window` buckets ending at the current instant.
    pub fn aggregate(&self, records: &[TransactionRecord], window: usize) -> CandleSeries {
        self.aggregate_at(records, window, Utc::now())
    }

    /// Aggregate with an explicit invocation instant. Deterministic for
    /// both policies except the synthetic fallback path.
    pub fn aggregate_at(
        &self,
        records: &[TransactionRecord],
        window: usize,
        now: DateTime<Utc>,
    ) -> CandleSeries {
        self.aggregate_at_with(records, window, now, &mut rand::thread_rng())
    }

    /// Aggregate with an explicit instant and randomness source, so the
    /// synthetic fallback is reproducible under a seeded RNG.
    pub fn aggregate_at_with<R: Rng + ?Sized>(
        &self,
        records: &[TransactionRecord],
        window: usize,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> CandleSeries {
        let width = self.config.bucket_width;
        let anchor = width.truncate_secs(now.timestamp());
        let step = width.duration_seconds();

        // Bucket grid, one entry per step, keyed by bucket start in Unix
        // seconds. Created fresh per invocation.
        let mut grid: FxHashMap<i64, Candle> = FxHashMap::default();
        for index in 0..window {
            let start_secs = anchor - index as i64 * step;
            grid.insert(start_secs, Candle::new(bucket_time(start_secs)));
        }

        for record in records {
            let Some(block_time) = record.block_time else {
                debug!("skipping record without block time");
                continue;
            };
            if record.failed() {
                // Tolerate unfiltered input; failed transactions carry
                // no trade.
                debug!(block_time, "skipping failed transaction");
                continue;
            }

            let key = width.truncate_secs(block_time);
            let Some(bucket) = grid.get_mut(&key) else {
                debug!(block_time, "skipping record outside requested window");
                continue;
            };

            if let Some(derived) = price::derive_price(record, &self.config) {
                bucket.apply_price(derived.price, derived.weight);
            }
        }

        let mut retained: Vec<Candle> = grid
            .into_values()
            .filter(Candle::is_touched)
            .map(|mut candle| {
                if candle.low.is_infinite() {
                    candle.low = candle.open;
                }
                candle
            })
            .collect();

        if retained.is_empty() && self.config.policy == AggregationPolicy::BalanceDelta {
            info!(window, "no usable price data, synthesizing placeholder series");
            let starts: Vec<DateTime<Utc>> = (0..window)
                .rev()
                .map(|index| bucket_time(anchor - index as i64 * step))
                .collect();
            return CandleSeries {
                candles: synthetic::synthesize(&starts, &self.config.synthetic, rng),
                provenance: Provenance::Synthetic,
            };
        }

        retained = postprocess::post_process(retained, self.config.max_step_change);
        debug!(candles = retained.len(), "aggregation complete");
        CandleSeries {
            candles: retained,
            provenance: Provenance::Real,
        }
    }
}

fn bucket_time(unix_secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_secs, 0).unwrap_or_else(Utc::now)
}
