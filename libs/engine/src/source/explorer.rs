use alloy::primitives::BlockNumber;
use chain::{
    error::ExplorerError,
    explorer::ExplorerClient,
    query::TransferQuery,
    transfer::TransferRecord,
};

use crate::source::filter::PageFilter;
use crate::source::handle::{Source, SourceInput};

pub struct ExplorerSource {
    pub client: ExplorerClient,
}

impl SourceInput for TransferRecord {
    fn block_number(&self) -> Option<BlockNumber> {
        self.block_number.parse().ok()
    }
}

#[async_trait::async_trait]
impl Source for ExplorerSource {
    type Item = TransferRecord;

    async fn page(&self, filter: PageFilter) -> Result<Vec<Self::Item>, ExplorerError> {
        let query = TransferQuery {
            contract: filter.contract,
            address: filter.address,
            page: filter.page,
            offset: filter.offset,
            start_block: filter.start_block,
        };
        self.client.get_token_transfers(&query).await
    }
}
