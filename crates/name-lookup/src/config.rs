use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::provider::DnsConfig;

/// Public chain list consumed on every forward lookup.
pub const DEFAULT_CHAINS_URL: &str = "https://chainid.network/chains.json";

/// Construction-time settings for the lookup bridge.
///
/// Built once by the host and passed down; nothing is read from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(rename = "chainsUrl")]
    #[serde(default = "default_chains_url")]
    pub chains_url: String,

    #[serde(default)]
    pub dns: DnsConfig,
}

fn default_chains_url() -> String {
    DEFAULT_CHAINS_URL.to_string()
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            chains_url: default_chains_url(),
            dns: DnsConfig::default(),
        }
    }
}

impl LookupConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}
