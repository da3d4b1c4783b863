//! Display-time-range transform for the chart renderer
//!
//! Not part of the aggregation core: filters an already-produced series
//! by a caller-chosen trailing window and formats axis tick labels.

use crate::Candle;
use chrono::{DateTime, Duration, Utc};

/// Map a zoom level to the trailing window in hours.
pub fn zoom_window_hours(zoom: f64) -> u32 {
    if zoom >= 1.8 {
        6
    } else if zoom >= 1.5 {
        12
    } else if zoom >= 1.2 {
        18
    } else if zoom >= 0.8 {
        24
    } else {
        48
    }
}

/// Retain candles within the trailing window ending at `now`.
pub fn trailing_window(candles: &[Candle], hours: u32, now: DateTime<Utc>) -> Vec<Candle> {
    let start = now - Duration::hours(i64::from(hours));
    candles
        .iter()
        .filter(|candle| candle.time >= start)
        .cloned()
        .collect()
}

/// Axis tick label for a candle's bucket start, `HH:MM`.
pub fn axis_label(candle: &Candle) -> String {
    candle.time.format("%H:%M").to_string()
}
