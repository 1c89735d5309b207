use std::fmt;

use reqwest::{Client, Url};

use crate::error::ExplorerError;
use crate::query::TransferQuery;
use crate::response;
use crate::transfer::TransferRecord;

pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// HTTP client for an Etherscan compatible block explorer API.
#[derive(Clone)]
pub struct ExplorerClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl ExplorerClient {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self { http: Client::new(), base_url, api_key: api_key.into() }
    }

    /// Fetches one page of ERC20 transfers. A single request, no retry.
    pub async fn get_token_transfers(
        &self,
        query: &TransferQuery,
    ) -> Result<Vec<TransferRecord>, ExplorerError> {
        tracing::debug!("GET {} {query:?}", self.base_url);

        let body = self
            .http
            .get(self.base_url.clone())
            .query(&query.params())
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        response::decode_transfers(&body)
    }
}

impl fmt::Debug for ExplorerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExplorerClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}
