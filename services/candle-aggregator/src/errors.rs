//! Error types for record decoding

use thiserror::Error;

/// Transaction record decoding errors
#[derive(Debug, Error)]
pub enum RecordError {
    /// The payload was not valid JSON or did not match the RPC shape
    #[error("malformed transaction record: {0}")]
    Malformed(#[from] serde_json::Error),
}
