use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Settings a D3 Connect style provider is constructed with.
///
/// These are handed to the provider as-is; resolution itself (including
/// DNSSEC verification) happens inside the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsConfig {
    #[serde(rename = "forwarderDomain")]
    pub forwarder_domain: String,

    #[serde(rename = "reverseLookupBaseDomain")]
    pub reverse_lookup_base_domain: String,

    #[serde(rename = "dnssecVerification")]
    pub dnssec_verification: bool,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            forwarder_domain: "vana".to_string(),
            reverse_lookup_base_domain: "web3-addr.vana".to_string(),
            dnssec_verification: true,
        }
    }
}

/// Trait for name resolution providers.
///
/// `Ok(None)` means the provider has no mapping; `Err` is reserved for
/// transport or provider faults.
#[async_trait]
pub trait ResolutionProvider: Send + Sync {
    /// Resolve `domain` to an address in the context of `currency_symbol`.
    async fn resolve(
        &self,
        domain: &str,
        currency_symbol: &str,
    ) -> Result<Option<String>, ProviderError>;

    /// Resolve `address` back to a domain.
    async fn reverse_resolve(
        &self,
        address: &str,
        currency_symbol: &str,
    ) -> Result<Option<String>, ProviderError>;
}

/// In-memory provider for testing and fixed deployments.
pub struct StaticProvider {
    /// `"{domain}:{symbol}"` → address.
    forward: HashMap<String, String>,
    /// `"{address}:{symbol}"` → domain, address lowercased.
    reverse: HashMap<String, String>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self {
            forward: HashMap::new(),
            reverse: HashMap::new(),
        }
    }

    fn make_key(name: &str, currency_symbol: &str) -> String {
        format!("{}:{}", name, currency_symbol)
    }

    /// Map `domain` to `address` for `currency_symbol`.
    pub fn add_domain(&mut self, domain: &str, currency_symbol: &str, address: &str) {
        self.forward
            .insert(Self::make_key(domain, currency_symbol), address.to_string());
    }

    /// Map `address` back to `domain` for `currency_symbol`.
    pub fn add_address(&mut self, address: &str, currency_symbol: &str, domain: &str) {
        self.reverse.insert(
            Self::make_key(&address.to_lowercase(), currency_symbol),
            domain.to_string(),
        );
    }
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResolutionProvider for StaticProvider {
    async fn resolve(
        &self,
        domain: &str,
        currency_symbol: &str,
    ) -> Result<Option<String>, ProviderError> {
        Ok(self
            .forward
            .get(&Self::make_key(domain, currency_symbol))
            .cloned())
    }

    async fn reverse_resolve(
        &self,
        address: &str,
        currency_symbol: &str,
    ) -> Result<Option<String>, ProviderError> {
        Ok(self
            .reverse
            .get(&Self::make_key(&address.to_lowercase(), currency_symbol))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_keyed_by_symbol() {
        let mut provider = StaticProvider::new();
        provider.add_domain("foo.bar", "ETH", "0xaaa");

        assert_eq!(
            provider.resolve("foo.bar", "ETH").await.unwrap().as_deref(),
            Some("0xaaa")
        );
        assert_eq!(provider.resolve("foo.bar", "POL").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_static_provider_reverse_case_insensitive() {
        let mut provider = StaticProvider::new();
        provider.add_address("0xAbC", "ETH", "foo.bar");

        assert_eq!(
            provider.reverse_resolve("0xabc", "ETH").await.unwrap().as_deref(),
            Some("foo.bar")
        );
        assert_eq!(provider.reverse_resolve("0xdef", "ETH").await.unwrap(), None);
    }
}
