use thiserror::Error;

/// Unified error type for name lookups.
///
/// Only faults end up here. "Chain not supported" and "nothing resolved"
/// are ordinary outcomes and are reported as `None`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("chain feed error: {0}")]
    ChainFeed(#[from] FeedError),

    #[error("resolution provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("config error: {0}")]
    Config(String),
}

/// Errors while fetching or decoding the chain metadata feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("http error: {0}")]
    Http(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors raised by a resolution provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),
}
