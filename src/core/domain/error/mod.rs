use thiserror::Error;

/// The error type for a probe run.
///
/// One flat variant per failure kind. Every failure is terminal: there is no
/// retry or fallback anywhere, and the CLI maps each of these to exit code 1
/// with the message as the only distinguishing output.
#[derive(Error, Debug)]
pub enum DialError {
    /// Wrong number of command-line arguments. Carries the usage line.
    #[error("{0}")]
    Usage(String),

    /// Transport failure or non-200 status on the node-list request.
    #[error("node list request failed: {0}")]
    FetchList(String),

    /// The node-list body could not be decoded as a node-list document.
    #[error("failed to decode node list response: {0}")]
    Decode(String),

    /// No node with the requested name exists in the decoded list.
    #[error("no node named '{0}' in node list")]
    NodeNotFound(String),

    /// The node's `PublicAddr` has no colon-delimited port segment.
    #[error("invalid PublicAddr format: {0}")]
    MalformedAddress(String),

    /// The substituted template does not parse as a URL.
    #[error("invalid target URL '{attempted}': {source}")]
    InvalidTargetUrl {
        attempted: String,
        source: url::ParseError,
    },

    /// Transport failure on the probe request itself. A non-2xx status from
    /// the target is not an error; only the network call failing is.
    #[error("probe request to {url} failed: {reason}")]
    Dispatch { url: String, reason: String },
}

/// Type alias for Results that may fail with a DialError
pub type DialResult<T> = Result<T, DialError>;
