use serde::{Deserialize, Serialize};

/// A lookup request as handed over by the wallet host.
///
/// Either `domain` (forward) or `address` (reverse) is expected to be set.
/// Both being set is not rejected: the domain is tried first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRequest {
    /// CAIP-2 chain id, e.g. `eip155:1`.
    #[serde(rename = "chainId")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LookupRequest {
    /// Forward lookup of `domain` on `chain_id`.
    pub fn domain(chain_id: &str, domain: &str) -> Self {
        Self {
            chain_id: Some(chain_id.to_string()),
            domain: Some(domain.to_string()),
            address: None,
        }
    }

    /// Reverse lookup of `address`.
    pub fn address(chain_id: &str, address: &str) -> Self {
        Self {
            chain_id: Some(chain_id.to_string()),
            domain: None,
            address: Some(address.to_string()),
        }
    }

    /// The domain, if present and non-empty.
    pub fn domain_query(&self) -> Option<&str> {
        self.domain.as_deref().filter(|d| !d.is_empty())
    }

    /// The address, if present and non-empty.
    pub fn address_query(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.is_empty())
    }
}
