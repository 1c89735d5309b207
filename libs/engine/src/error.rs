use alloy::primitives::BlockNumber;
use chain::error::ExplorerError;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("page size {page_size} must be between 1 and {page_ceiling}")]
    InvalidPageSize { page_size: u64, page_ceiling: u64 },

    #[error(
        "failed to fetch page {display_page} (api page {api_page}, start block {})",
        start_block_label(.start_block)
    )]
    Page {
        display_page: u64,
        api_page: u64,
        start_block: Option<BlockNumber>,
        #[source]
        source: ExplorerError,
    },

    #[error("cannot re-anchor: last transfer has no valid block number")]
    MissingBlockNumber,

    #[error("re-anchoring stalled: start block {next} does not advance past {previous}")]
    Stalled { previous: BlockNumber, next: BlockNumber },
}

fn start_block_label(start_block: &Option<BlockNumber>) -> String {
    match start_block {
        Some(block_number) => block_number.to_string(),
        None => "unset".to_string(),
    }
}
