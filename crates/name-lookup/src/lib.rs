pub mod chains;
pub mod config;
pub mod error;
pub mod lookup;
pub mod provider;
pub mod types;

// Re-exports for convenience
pub use chains::{resolve_chain_metadata, ChainId, ChainSource, StaticChainSource};
#[cfg(feature = "chain-registry")]
pub use chains::HttpChainSource;
pub use config::LookupConfig;
pub use error::Error;
pub use lookup::NameLookup;
pub use provider::{DnsConfig, ResolutionProvider, StaticProvider};
pub use types::chain::ChainMetadata;
pub use types::request::LookupRequest;
pub use types::response::{LookupResponse, ResolvedAddress, ResolvedDomain, PROTOCOL};
