use reqwest::StatusCode;

/// Outcome of a successful probe run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    /// Port token extracted from the matched node's `PublicAddr`.
    pub port: String,
    /// Canonical form of the composed probe URL.
    pub target_url: String,
    /// Status code the probe target answered with. Any value counts as a
    /// successful run; the caller just reports it.
    pub status: StatusCode,
}
