use serde::Deserialize;

/// One ERC20 transfer as listed by the explorer `tokentx` action.
///
/// Fields are kept in their wire encoding (decimal strings). Wire fields not
/// listed here (gas, token metadata, confirmations...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    #[serde(rename = "timeStamp")]
    pub timestamp: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub hash: String,
    pub block_number: String,
}
