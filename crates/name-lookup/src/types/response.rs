use serde::{Deserialize, Serialize};

/// Protocol label attached to every resolution.
pub const PROTOCOL: &str = "D3 Connect";

/// Response returned to the wallet host.
///
/// Serializes to either `{"resolvedAddresses": [...]}` or
/// `{"resolvedDomains": [...]}`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupResponse {
    Addresses {
        #[serde(rename = "resolvedAddresses")]
        resolved_addresses: Vec<ResolvedAddress>,
    },
    Domains {
        #[serde(rename = "resolvedDomains")]
        resolved_domains: Vec<ResolvedDomain>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAddress {
    #[serde(rename = "resolvedAddress")]
    pub resolved_address: String,

    pub protocol: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDomain {
    #[serde(rename = "resolvedDomain")]
    pub resolved_domain: String,

    pub protocol: String,
}

impl LookupResponse {
    /// Single forward resolution result.
    pub fn address(resolved_address: String) -> Self {
        LookupResponse::Addresses {
            resolved_addresses: vec![ResolvedAddress {
                resolved_address,
                protocol: PROTOCOL.to_string(),
            }],
        }
    }

    /// Single reverse resolution result.
    pub fn domain(resolved_domain: String) -> Self {
        LookupResponse::Domains {
            resolved_domains: vec![ResolvedDomain {
                resolved_domain,
                protocol: PROTOCOL.to_string(),
            }],
        }
    }

    pub fn resolved_addresses(&self) -> &[ResolvedAddress] {
        match self {
            LookupResponse::Addresses { resolved_addresses } => resolved_addresses,
            LookupResponse::Domains { .. } => &[],
        }
    }

    pub fn resolved_domains(&self) -> &[ResolvedDomain] {
        match self {
            LookupResponse::Domains { resolved_domains } => resolved_domains,
            LookupResponse::Addresses { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_response_json() {
        let json = serde_json::to_value(LookupResponse::address("0xaaa".to_string())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "resolvedAddresses": [{ "resolvedAddress": "0xaaa", "protocol": "D3 Connect" }]
            })
        );
    }

    #[test]
    fn test_domain_response_json() {
        let response = LookupResponse::domain("foo.bar".to_string());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "resolvedDomains": [{ "resolvedDomain": "foo.bar", "protocol": "D3 Connect" }]
            })
        );
        assert!(response.resolved_addresses().is_empty());
        assert_eq!(response.resolved_domains().len(), 1);
    }
}
