//! Custom assertions for candle series

use candle_aggregator::Candle;

/// Assert that two floating point values are approximately equal
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "Values not approximately equal: {} != {} (diff: {}, tolerance: {})",
        left,
        right,
        diff,
        tolerance
    );
}

/// Assert the OHLC invariant `low <= open,close <= high` for one candle
pub fn assert_candle_consistent(candle: &Candle) {
    assert!(
        candle.high >= candle.open.max(candle.close),
        "high {} below open/close ({}, {}) at {}",
        candle.high,
        candle.open,
        candle.close,
        candle.time_iso()
    );
    assert!(
        candle.low <= candle.open.min(candle.close),
        "low {} above open/close ({}, {}) at {}",
        candle.low,
        candle.open,
        candle.close,
        candle.time_iso()
    );
    assert!(candle.value >= 0.0, "negative volume at {}", candle.time_iso());
}

/// Assert a series is strictly ascending by bucket start
pub fn assert_strictly_ascending(candles: &[Candle]) {
    for window in candles.windows(2) {
        assert!(
            window[0].time < window[1].time,
            "series not strictly ascending at {} / {}",
            window[0].time_iso(),
            window[1].time_iso()
        );
    }
}
