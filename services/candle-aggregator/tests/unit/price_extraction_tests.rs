//! Tests for price derivation and the sanity band

use candle_aggregator::{CandleAggregator, Provenance};
use chrono::{DateTime, TimeZone, Utc};
use rstest::*;
use test_utils::{assert_approx_eq, RecordFactory};

#[fixture]
fn aggregator() -> CandleAggregator {
    CandleAggregator::default()
}

#[fixture]
fn factory() -> RecordFactory {
    RecordFactory::new()
}

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

#[rstest]
#[case(0.0)] // zero delta never yields a candidate
#[case(1000.0)] // band upper bound is exclusive
#[case(1000.0001)] // just outside the band
fn test_out_of_band_price_contributes_nothing(
    aggregator: CandleAggregator,
    factory: RecordFactory,
    now: DateTime<Utc>,
    #[case] bad_price: f64,
) {
    // Only the out-of-band record: no bucket is touched, so the engine
    // falls back to a synthetic series.
    let series = aggregator.aggregate_at(&[factory.swap_at(now, bad_price)], 12, now);
    assert_eq!(series.provenance, Provenance::Synthetic);

    // Paired with a real record the noise leaves no trace in OHLC or
    // volume.
    let records = vec![factory.swap_at(now, 0.5), factory.swap_at(now, bad_price)];
    let series = aggregator.aggregate_at(&records, 12, now);
    assert_eq!(series.provenance, Provenance::Real);
    assert_eq!(series.len(), 1);

    let candle = &series.candles[0];
    assert_eq!(candle.open, 0.5);
    assert_eq!(candle.close, 0.5);
    assert_approx_eq(candle.value, 0.5, 1e-12);
}

#[rstest]
fn test_band_accepts_interior_prices(
    aggregator: CandleAggregator,
    factory: RecordFactory,
    now: DateTime<Utc>,
) {
    let series = aggregator.aggregate_at(&[factory.swap_at(now, 999.9)], 12, now);
    assert_eq!(series.provenance, Provenance::Real);
    assert_approx_eq(series.candles[0].open, 999.9, 1e-6);
}

#[rstest]
fn test_record_price_is_mean_of_candidates(
    aggregator: CandleAggregator,
    factory: RecordFactory,
    now: DateTime<Utc>,
) {
    let record = factory.swap_with_pairs(now, &[0.1, 0.2, 0.6]);
    let series = aggregator.aggregate_at(&[record], 12, now);
    assert_approx_eq(series.candles[0].open, 0.3, 1e-12);
}

#[rstest]
fn test_out_of_band_pair_excluded_from_mean(
    aggregator: CandleAggregator,
    factory: RecordFactory,
    now: DateTime<Utc>,
) {
    // The 1000+ pair is dropped before averaging, not clamped into it.
    let record = factory.swap_with_pairs(now, &[0.1, 0.3, 1234.0]);
    let series = aggregator.aggregate_at(&[record], 12, now);

    let candle = &series.candles[0];
    assert_approx_eq(candle.open, 0.2, 1e-12);
    // Volume counts the two surviving pairs only.
    assert_approx_eq(candle.value, 0.4, 1e-12);
}

#[rstest]
fn test_record_with_missing_meta_is_skipped(
    aggregator: CandleAggregator,
    now: DateTime<Utc>,
) {
    let record = candle_aggregator::TransactionRecord {
        block_time: Some(now.timestamp()),
        meta: None,
    };
    let series = aggregator.aggregate_at(&[record], 12, now);
    assert_eq!(series.provenance, Provenance::Synthetic);
}
