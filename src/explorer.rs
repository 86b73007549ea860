//! Block explorer client for balance and transaction-history queries
//! against a BlockCypher-compatible REST API.
//!
//! This is a collaborator of the wallet core, not part of it: the core's
//! only obligation here is to supply a correctly encoded address string.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants::{EXPLORER_CHAIN, EXPLORER_URL};

/// Configuration for an [`ExplorerClient`].
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Base URL of the explorer API.
    pub base_url: String,
    /// Chain path segment, e.g. `btc/test3`.
    pub chain: String,
    /// Optional API token appended as a `token` query parameter.
    pub token: Option<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: EXPLORER_URL.to_string(),
            chain: EXPLORER_CHAIN.to_string(),
            token: None,
        }
    }
}

/// Errors from explorer queries.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed explorer response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Server returned a non-2xx response.
    #[error("explorer error ({status_code}): {message}")]
    Server {
        status_code: u16,
        message: String,
    },

    /// Address unknown to the explorer (404).
    #[error("address not found")]
    NotFound,
}

/// Confirmed balance summary for one address, in satoshis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBalance {
    #[serde(default)]
    pub address: String,
    /// Confirmed balance.
    #[serde(default)]
    pub balance: u64,
    /// Unconfirmed delta; negative while outgoing spends are pending.
    #[serde(default)]
    pub unconfirmed_balance: i64,
    #[serde(default)]
    pub final_balance: u64,
    #[serde(default)]
    pub n_tx: u64,
}

/// One output of a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(default)]
    pub value: u64,
    #[serde(default)]
    pub addresses: Vec<String>,
}

/// A transaction referencing the queried address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxDetail {
    #[serde(default)]
    pub hash: String,
    /// Confirmation height; -1 for unconfirmed transactions.
    #[serde(default)]
    pub block_height: i64,
    /// Total output value in satoshis.
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub fees: u64,
    #[serde(default)]
    pub outputs: Vec<TxOutput>,
}

#[derive(Debug, Clone, Deserialize)]
struct AddressHistory {
    #[serde(default)]
    txs: Vec<TxDetail>,
}

/// HTTP client for the explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    config: ExplorerConfig,
    client: reqwest::Client,
}

impl ExplorerClient {
    pub fn new(config: ExplorerConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Confirmed balance for an address.
    pub async fn address_balance(&self, address: &str) -> Result<AddressBalance, ExplorerError> {
        let path = format!("addrs/{}/balance", address);
        self.do_request(&path).await
    }

    /// Transactions referencing an address, newest first as the API
    /// returns them.
    pub async fn address_transactions(&self, address: &str) -> Result<Vec<TxDetail>, ExplorerError> {
        let path = format!("addrs/{}/full", address);
        let history: AddressHistory = self.do_request(&path).await?;
        Ok(history.txs)
    }

    async fn do_request<T: DeserializeOwned>(&self, path: &str) -> Result<T, ExplorerError> {
        let mut url = format!("{}/{}/{}", self.config.base_url, self.config.chain, path);
        if let Some(ref token) = self.config.token {
            url.push_str("?token=");
            url.push_str(token);
        }

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(ExplorerError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ExplorerError::Server {
                status_code: status.as_u16(),
                message,
            });
        }

        let text = resp.text().await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }
}
