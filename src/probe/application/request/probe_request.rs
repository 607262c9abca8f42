use crate::core::domain::error::{DialError, DialResult};

/// Usage line printed when the argument count is wrong.
pub const USAGE: &str = "Usage: stun-dial <Name> <First URL> <Third URL Template>";

/// Explicit input record for one probe run.
///
/// The CLI threads its arguments through this struct instead of letting the
/// helpers read ambient process state, which keeps the address and URL
/// helpers pure and independently testable.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeRequest {
    /// Node name to look up (exact, case-sensitive match).
    pub name: String,
    /// URL of the node-list endpoint.
    pub list_url: String,
    /// Probe URL template containing the literal `port` marker.
    pub target_template: String,
}

impl ProbeRequest {
    /// Builds a request from the positional arguments (program name already
    /// stripped).
    ///
    /// # Errors
    /// Returns `DialError::Usage` carrying the usage line when the count is
    /// anything other than three.
    pub fn from_args(args: &[String]) -> DialResult<Self> {
        match args {
            [name, list_url, target_template] => Ok(Self {
                name: name.clone(),
                list_url: list_url.clone(),
                target_template: target_template.clone(),
            }),
            _ => Err(DialError::Usage(USAGE.to_string())),
        }
    }
}
