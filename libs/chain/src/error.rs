use crate::response::NO_TRANSACTIONS;

#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("explorer request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("explorer API error: {message}{}", detail(.result))]
    Api { message: String, result: Option<String> },

    #[error("malformed explorer {stage}: {source}")]
    Decode {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ExplorerError {
    /// The explorer reports an empty result set with a non-success status.
    pub fn is_no_transactions(&self) -> bool {
        matches!(self, ExplorerError::Api { message, .. } if message == NO_TRANSACTIONS)
    }
}

fn detail(result: &Option<String>) -> String {
    match result {
        Some(result) => format!(" ({result})"),
        None => String::new(),
    }
}
