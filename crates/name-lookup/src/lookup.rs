use std::sync::Arc;

use crate::chains::{self, ChainSource};
use crate::error::Error;
use crate::provider::ResolutionProvider;
use crate::types::request::LookupRequest;
use crate::types::response::LookupResponse;

/// Currency symbol used for every reverse lookup, whatever the chain.
pub const REVERSE_CURRENCY_SYMBOL: &str = "ETH";

/// Name lookup handler for the wallet host.
///
/// Holds the resolution provider and the chain metadata feed. Both are
/// injected at construction, so tests swap in fakes the same way a host
/// swaps providers.
#[derive(Clone)]
pub struct NameLookup {
    provider: Arc<dyn ResolutionProvider>,
    chains: Arc<dyn ChainSource>,
}

impl NameLookup {
    pub fn new(provider: Arc<dyn ResolutionProvider>, chains: Arc<dyn ChainSource>) -> Self {
        Self { provider, chains }
    }

    /// Use the public chain list configured in `config`.
    #[cfg(feature = "chain-registry")]
    pub fn from_config(
        provider: Arc<dyn ResolutionProvider>,
        config: &crate::config::LookupConfig,
    ) -> Self {
        Self::new(
            provider,
            Arc::new(chains::HttpChainSource::from_config(config)),
        )
    }

    /// Handle one lookup request.
    ///
    /// A domain is resolved first. If the chain is unsupported the lookup
    /// stops there with `None`; if the domain simply has no mapping, an
    /// address on the same request is still reverse resolved.
    pub async fn on_name_lookup(
        &self,
        request: &LookupRequest,
    ) -> Result<Option<LookupResponse>, Error> {
        if let Some(domain) = request.domain_query() {
            let chain_id = request.chain_id.as_deref().unwrap_or_default();
            let Some(chain) = chains::resolve_chain_metadata(chain_id, self.chains.as_ref()).await?
            else {
                tracing::info!(chain_id, "can't load chain info");
                return Ok(None);
            };

            let symbol = chain.currency_symbol();
            match self.provider.resolve(domain, symbol).await? {
                Some(address) if !address.is_empty() => {
                    return Ok(Some(LookupResponse::address(address)));
                }
                _ => tracing::debug!(domain, symbol, "no address for domain"),
            }
        }

        if let Some(address) = request.address_query() {
            match self
                .provider
                .reverse_resolve(address, REVERSE_CURRENCY_SYMBOL)
                .await?
            {
                Some(domain) if !domain.is_empty() => {
                    return Ok(Some(LookupResponse::domain(domain)));
                }
                _ => tracing::debug!(address, "no domain for address"),
            }
        }

        Ok(None)
    }
}
