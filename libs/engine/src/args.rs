use std::time::Duration;

use alloy::primitives::Address;

pub const DEFAULT_PAGE_SIZE: u64 = 5000;

/// The explorer rejects any request where `page * offset` exceeds this value.
pub const PAGE_CEILING: u64 = 10_000;

pub const REQUEST_DELAY_MS: u64 = 200;

pub const REQUEST_DELAY: Duration = Duration::from_millis(REQUEST_DELAY_MS);

#[derive(Debug, Clone)]
pub struct Args {
    /// Token contract whose transfers are listed
    pub contract: Address,
    /// Holder address
    pub address: Address,
    pub page_size: u64,
    pub page_ceiling: u64,
    /// Pause between two consecutive page requests
    pub request_delay: Duration,
    /// Treat a "No transactions found" status as an empty page
    pub empty_is_ok: bool,
}

impl Args {
    pub fn new(contract: Address, address: Address) -> Self {
        Self {
            contract,
            address,
            page_size: DEFAULT_PAGE_SIZE,
            page_ceiling: PAGE_CEILING,
            request_delay: REQUEST_DELAY,
            empty_is_ok: false,
        }
    }
}
