use serde::Deserialize;
use serde_json::Value;

use crate::error::ExplorerError;
use crate::transfer::TransferRecord;

pub const STATUS_OK: &str = "1";
pub const NO_TRANSACTIONS: &str = "No transactions found";

#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

/// Decodes a `tokentx` response body.
///
/// Any status other than `"1"` is an API error, whatever the shape of
/// `result`. On success `result` must be an array of transfer records.
pub fn decode_transfers(body: &[u8]) -> Result<Vec<TransferRecord>, ExplorerError> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|source| ExplorerError::Decode { stage: "envelope", source })?;

    if envelope.status != STATUS_OK {
        let result = match envelope.result {
            Value::Null => None,
            Value::String(text) => Some(text),
            Value::Array(items) if items.is_empty() => None,
            other => Some(other.to_string()),
        };
        return Err(ExplorerError::Api { message: envelope.message, result });
    }

    serde_json::from_value(envelope.result)
        .map_err(|source| ExplorerError::Decode { stage: "transfer list", source })
}
