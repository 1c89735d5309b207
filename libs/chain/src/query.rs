use alloy::primitives::{Address, BlockNumber};

/// A single page request against `module=account&action=tokentx`, always
/// sorted by ascending block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferQuery {
    pub contract: Address,
    pub address: Address,
    pub page: u64,
    pub offset: u64,
    pub start_block: Option<BlockNumber>,
}

impl TransferQuery {
    /// Query string pairs, without the API key.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("module", "account".to_string()),
            ("action", "tokentx".to_string()),
            ("contractaddress", format!("{:#x}", self.contract)),
            ("address", format!("{:#x}", self.address)),
            ("page", self.page.to_string()),
            ("offset", self.offset.to_string()),
            ("sort", "asc".to_string()),
        ];
        if let Some(start_block) = self.start_block {
            params.push(("startblock", start_block.to_string()));
        }
        params
    }
}
