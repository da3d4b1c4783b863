//! Solana transaction record model
//!
//! Mirrors the subset of the RPC `getTransaction` response the engine
//! reads. Everything else in the payload is ignored during
//! deserialization; the engine never fails on an individual record.

use crate::errors::RecordError;
use serde::{Deserialize, Serialize};

/// One confirmed transaction as returned by the ledger RPC
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Confirmation time in Unix seconds; absent for unconfirmed slots
    #[serde(default)]
    pub block_time: Option<i64>,
    /// Transaction metadata; absent when the node pruned it
    #[serde(default)]
    pub meta: Option<TransactionMeta>,
}

/// Transaction metadata carrying balance snapshots and the fee
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    /// Non-null when the transaction failed
    #[serde(default)]
    pub err: Option<serde_json::Value>,
    /// Network fee in lamports
    #[serde(default)]
    pub fee: u64,
    /// Native balances before execution, lamports, by account index
    #[serde(default)]
    pub pre_balances: Vec<u64>,
    /// Native balances after execution, lamports, by account index
    #[serde(default)]
    pub post_balances: Vec<u64>,
    /// Token balances before execution
    #[serde(default)]
    pub pre_token_balances: Vec<TokenBalance>,
    /// Token balances after execution
    #[serde(default)]
    pub post_token_balances: Vec<TokenBalance>,
}

/// Per-account token balance snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalance {
    /// Index into the transaction's account list
    pub account_index: usize,
    /// Token amount in UI (decimal-adjusted) units
    #[serde(default)]
    pub ui_token_amount: UiTokenAmount,
}

/// Decimal-adjusted token amount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTokenAmount {
    /// Amount in whole-token units; null for zero-decimal edge cases
    #[serde(default)]
    pub ui_amount: Option<f64>,
}

impl TransactionRecord {
    /// Decode a record from the RPC JSON payload
    pub fn from_json(payload: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// True when the transaction executed but failed
    pub fn failed(&self) -> bool {
        self.meta
            .as_ref()
            .is_some_and(|meta| meta.err.is_some())
    }
}
