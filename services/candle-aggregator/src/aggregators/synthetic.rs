//! Synthetic placeholder series
//!
//! Emitted in balance-delta mode when no record yields a usable price,
//! so the presentation layer always has a non-empty series to render.
//! The output is tagged `Provenance::Synthetic` by the caller; nothing
//! here resembles ledger data.

use crate::config::SyntheticConfig;
use crate::Candle;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Generate one placeholder candle per bucket start.
///
/// `bucket_starts` must be ascending; the walk is centered on the
/// configured base price with symmetric volatility and a volume drawn
/// from `[volume_floor, volume_floor + volume_spread)` scaled by price.
pub(crate) fn synthesize<R: Rng + ?Sized>(
    bucket_starts: &[DateTime<Utc>],
    config: &SyntheticConfig,
    rng: &mut R,
) -> Vec<Candle> {
    bucket_starts
        .iter()
        .map(|&time| {
            let price =
                config.base_price * (1.0 + (rng.gen_range(0.0..1.0) - 0.5) * config.volatility);
            let high = price * (1.0 + rng.gen_range(0.0..1.0) * config.volatility);
            let low = price * (1.0 - rng.gen_range(0.0..1.0) * config.volatility);
            let close = price * (1.0 + (rng.gen_range(0.0..1.0) - 0.5) * config.volatility);

            let mut candle = Candle::new(time);
            candle.open = price;
            candle.high = high.max(price).max(close);
            candle.low = low.min(price).min(close);
            candle.close = close;
            candle.value =
                price * (config.volume_floor + rng.gen_range(0.0..1.0) * config.volume_spread);
            candle.mark_touched();
            candle
        })
        .collect()
}
