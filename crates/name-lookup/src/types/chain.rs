use serde::{Deserialize, Serialize};

/// One entry of the public chain list (`chains.json`).
///
/// Only `chainId` and `nativeCurrency.symbol` drive resolution; the rest is
/// carried along. Entries in the feed are not uniform, so everything else
/// is optional or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainMetadata {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub chain: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default)]
    pub rpc: Vec<String>,

    #[serde(rename = "nativeCurrency")]
    pub native_currency: NativeCurrency,

    #[serde(rename = "infoURL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_url: Option<String>,

    #[serde(rename = "shortName")]
    #[serde(default)]
    pub short_name: String,

    #[serde(rename = "chainId")]
    pub chain_id: u64,

    #[serde(rename = "networkId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<u64>,

    #[serde(default)]
    pub explorers: Vec<Explorer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NativeCurrency {
    #[serde(default)]
    pub name: String,

    pub symbol: String,

    #[serde(default)]
    pub decimals: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explorer {
    #[serde(default)]
    pub name: String,

    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
}

impl ChainMetadata {
    /// Parse a full chain list.
    ///
    /// Only a document that is not a JSON array is an error. Entries that
    /// don't decode as a chain are skipped so one odd record can't hide the
    /// rest of the list.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Ok(Self::list_from_values(entries))
    }

    /// Decode the entries of an already parsed chain list, skipping the ones
    /// that don't fit.
    pub fn list_from_values(entries: Vec<serde_json::Value>) -> Vec<Self> {
        let total = entries.len();
        let chains: Vec<Self> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value(entry).ok())
            .collect();
        if chains.len() < total {
            tracing::debug!(skipped = total - chains.len(), "skipped malformed chain entries");
        }
        chains
    }

    /// Symbol of the chain's native currency, e.g. `ETH`.
    pub fn currency_symbol(&self) -> &str {
        &self.native_currency.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_entries() {
        let json = r#"[
            {
                "name": "Ethereum Mainnet",
                "chain": "ETH",
                "icon": "ethereum",
                "rpc": ["https://mainnet.infura.io/v3/${INFURA_API_KEY}"],
                "nativeCurrency": { "name": "Ether", "symbol": "ETH", "decimals": 18 },
                "infoURL": "https://ethereum.org",
                "shortName": "eth",
                "chainId": 1,
                "networkId": 1,
                "explorers": [
                    { "name": "etherscan", "url": "https://etherscan.io", "standard": "EIP3091" }
                ]
            },
            {
                "name": "Polygon Mainnet",
                "chain": "Polygon",
                "rpc": [],
                "nativeCurrency": { "name": "POL", "symbol": "POL", "decimals": 18 },
                "shortName": "pol",
                "chainId": 137
            }
        ]"#;

        let chains = ChainMetadata::list_from_json(json).unwrap();
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].currency_symbol(), "ETH");
        assert_eq!(chains[0].explorers[0].standard.as_deref(), Some("EIP3091"));
        assert_eq!(chains[1].chain_id, 137);
        assert!(chains[1].icon.is_none());
        assert!(chains[1].explorers.is_empty());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let json = r#"[
            { "chainId": 1, "nativeCurrency": { "symbol": "ETH" } },
            { "chainId": 999, "name": "odd" },
            { "chainId": 5, "nativeCurrency": { "symbol": "GOR" }, "rpc": "not-a-list" },
            { "chainId": 10, "nativeCurrency": { "symbol": "ETH" }, "explorers": [{ "name": "no url" }] },
            "garbage",
            { "chainId": 137, "nativeCurrency": { "symbol": "POL" } }
        ]"#;

        let chains = ChainMetadata::list_from_json(json).unwrap();
        let ids: Vec<u64> = chains.iter().map(|c| c.chain_id).collect();
        assert_eq!(ids, vec![1, 137]);
    }

    #[test]
    fn test_non_array_document_is_error() {
        assert!(ChainMetadata::list_from_json("not json").is_err());
        assert!(ChainMetadata::list_from_json(r#"{ "chainId": 1 }"#).is_err());
    }
}
