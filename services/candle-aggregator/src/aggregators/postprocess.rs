//! Post-processing of real candle series
//!
//! Chronological sort, single-candle widening so a lone bucket still
//! renders with body and wicks, and a close-to-close jump clamp that
//! caps single-step moves at the configured fraction.

use crate::Candle;
use tracing::debug;

const SINGLE_CANDLE_SPREAD: f64 = 0.001;

/// Sort, widen and clamp a retained bucket set into the final series.
pub(crate) fn post_process(mut candles: Vec<Candle>, max_step_change: f64) -> Vec<Candle> {
    candles.sort_by_key(|candle| candle.time);

    if candles.len() == 1 {
        let candle = &mut candles[0];
        candle.high = candle.high.max(candle.open * (1.0 + SINGLE_CANDLE_SPREAD));
        candle.low = candle.low.min(candle.open * (1.0 - SINGLE_CANDLE_SPREAD));
        return candles;
    }

    // Clamp against the closes as they stood before this pass, so one
    // outlier does not drag the reference for its successors.
    let prior_closes: Vec<f64> = candles.iter().map(|candle| candle.close).collect();

    for index in 1..candles.len() {
        let prev_close = prior_closes[index - 1];
        let change = candles[index].close - prev_close;
        let percent_change = (change / prev_close).abs();

        if percent_change > max_step_change {
            let direction = if change > 0.0 { 1.0 } else { -1.0 };
            let clamped = prev_close * (1.0 + direction * max_step_change);
            debug!(
                from = prior_closes[index],
                to = clamped,
                "clamping close-to-close jump"
            );
            let candle = &mut candles[index];
            candle.close = clamped;
            candle.high = candle.high.max(clamped);
            candle.low = candle.low.min(clamped);
        }
    }

    candles
}
