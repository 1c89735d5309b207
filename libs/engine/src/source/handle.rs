use alloy::primitives::BlockNumber;
use chain::error::ExplorerError;

use crate::source::filter::PageFilter;

pub trait SourceInput {
    fn block_number(&self) -> Option<BlockNumber>;
}

/// A paginated listing sorted by ascending block number.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    type Item: SourceInput;

    async fn page(&self, filter: PageFilter) -> Result<Vec<Self::Item>, ExplorerError>;
}
