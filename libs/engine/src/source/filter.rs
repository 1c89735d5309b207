use alloy::primitives::{Address, BlockNumber};

/// One page of the transfer listing, as requested by the fetch loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFilter {
    pub contract: Address,
    pub address: Address,
    pub page: u64,
    pub offset: u64,
    pub start_block: Option<BlockNumber>,
}
