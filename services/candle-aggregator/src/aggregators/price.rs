//! Per-record price derivation
//!
//! A record yields at most one price. In balance-delta mode the price is
//! the mean of the per-account-pair SOL/token exchange ratios that pass
//! the sanity band; in fee-only mode it is the raw network fee.

use crate::config::{AggregationPolicy, AggregatorConfig};
use crate::record::{TransactionMeta, TransactionRecord};
use tracing::debug;

const LAMPORTS_PER_SOL: f64 = 1e9;

/// Price derived from one record
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RecordPrice {
    /// Derived price
    pub price: f64,
    /// Number of contributing balance-change pairs (1 in fee-only mode)
    pub weight: usize,
}

/// Derive a price from a record under the configured policy.
///
/// Returns `None` for records that carry no usable price data; such
/// records must not affect any bucket.
pub(crate) fn derive_price(
    record: &TransactionRecord,
    config: &AggregatorConfig,
) -> Option<RecordPrice> {
    let meta = record.meta.as_ref()?;
    match config.policy {
        AggregationPolicy::BalanceDelta => balance_delta_price(meta, config),
        AggregationPolicy::FeeOnly => Some(RecordPrice {
            price: meta.fee as f64,
            weight: 1,
        }),
    }
}

/// Mean SOL-per-token ratio over all balance pairs inside the band.
fn balance_delta_price(meta: &TransactionMeta, config: &AggregatorConfig) -> Option<RecordPrice> {
    let mut candidates: Vec<f64> = Vec::new();

    for (pre, post) in meta
        .pre_token_balances
        .iter()
        .zip(meta.post_token_balances.iter())
    {
        let pre_amount = pre.ui_token_amount.ui_amount.unwrap_or(0.0);
        let post_amount = post.ui_token_amount.ui_amount.unwrap_or(0.0);
        let token_change = (post_amount - pre_amount).abs();

        let pre_lamports = lamports_at(&meta.pre_balances, pre.account_index);
        let post_lamports = lamports_at(&meta.post_balances, post.account_index);
        let sol_change = (post_lamports - pre_lamports).abs() / LAMPORTS_PER_SOL;

        if token_change <= 0.0 || sol_change <= 0.0 {
            continue;
        }

        let price = sol_change / token_change;
        if price > config.min_price && price < config.max_price {
            candidates.push(price);
        } else {
            debug!(price, "discarding out-of-band price candidate");
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let mean = candidates.iter().sum::<f64>() / candidates.len() as f64;
    Some(RecordPrice {
        price: mean,
        weight: candidates.len(),
    })
}

fn lamports_at(balances: &[u64], index: usize) -> f64 {
    balances.get(index).copied().unwrap_or(0) as f64
}
