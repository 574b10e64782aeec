//! Error types for port operations.

/// Failures talking to the word lookup service.
///
/// The acquisition loop treats every variant as "no result for this attempt";
/// the distinction only matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Connection failure, timeout, or non-success HTTP status
    #[error("Lookup request failed: {0}")]
    RequestFailed(String),
    /// The service answered with a body we could not decode
    #[error("Invalid lookup response: {0}")]
    InvalidResponse(String),
}
