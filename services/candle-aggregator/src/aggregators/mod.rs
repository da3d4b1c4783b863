//! Aggregation pipeline stages

pub mod candle;
pub(crate) mod postprocess;
pub(crate) mod price;
pub(crate) mod synthetic;

pub use candle::CandleAggregator;
