use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::error::FeedError;
use crate::types::chain::ChainMetadata;

static EIP155_CHAIN_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^eip155:(?<chain_id>\d+)$").unwrap());

/// Numeric EVM chain id extracted from a CAIP-2 `eip155:<id>` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Parse `eip155:<digits>`. Any other shape, or an id that does not
    /// fit in a `u64`, yields `None`.
    pub fn parse(caip2: &str) -> Option<Self> {
        let captures = EIP155_CHAIN_ID.captures(caip2)?;
        captures["chain_id"].parse().ok().map(ChainId)
    }
}

/// Trait for chain metadata feeds (public chain list, fixtures, ...).
#[async_trait]
pub trait ChainSource: Send + Sync {
    /// Fetch the complete chain list.
    async fn fetch_full_chains(&self) -> Result<Vec<ChainMetadata>, FeedError>;
}

/// Static in-memory chain list.
pub struct StaticChainSource {
    chains: Vec<ChainMetadata>,
}

impl StaticChainSource {
    pub fn new(chains: Vec<ChainMetadata>) -> Self {
        Self { chains }
    }

    /// Build from a `chains.json` style document.
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let chains =
            ChainMetadata::list_from_json(json).map_err(|e| FeedError::Parse(e.to_string()))?;
        Ok(Self::new(chains))
    }
}

#[async_trait]
impl ChainSource for StaticChainSource {
    async fn fetch_full_chains(&self) -> Result<Vec<ChainMetadata>, FeedError> {
        Ok(self.chains.clone())
    }
}

/// Chain list fetched over HTTP on every call.
#[cfg(feature = "chain-registry")]
pub struct HttpChainSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "chain-registry")]
impl HttpChainSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Use a preconfigured client (timeouts, proxy settings).
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn from_config(config: &crate::config::LookupConfig) -> Self {
        Self::new(config.chains_url.clone())
    }
}

#[cfg(feature = "chain-registry")]
impl Default for HttpChainSource {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_CHAINS_URL)
    }
}

#[cfg(feature = "chain-registry")]
#[async_trait]
impl ChainSource for HttpChainSource {
    async fn fetch_full_chains(&self) -> Result<Vec<ChainMetadata>, FeedError> {
        // TODO: cache the list; it is re-downloaded for every forward lookup.
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FeedError::Http(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Http(e.to_string()))?;
        let chains =
            ChainMetadata::list_from_json(&body).map_err(|e| FeedError::Parse(e.to_string()))?;

        tracing::debug!(url = %self.url, count = chains.len(), "fetched chain list");
        Ok(chains)
    }
}

/// Look up the descriptor for a CAIP-2 chain id.
///
/// Returns `Ok(None)` when the id is malformed (without touching the feed)
/// or when the feed has no such chain. Feed faults are returned as-is.
pub async fn resolve_chain_metadata(
    chain_id: &str,
    source: &dyn ChainSource,
) -> Result<Option<ChainMetadata>, FeedError> {
    let Some(ChainId(id)) = ChainId::parse(chain_id) else {
        tracing::debug!(chain_id, "not an eip155 chain id");
        return Ok(None);
    };

    let chains = source.fetch_full_chains().await?;
    Ok(chains.into_iter().find(|chain| chain.chain_id == id))
}
