use crate::core::domain::error::{DialError, DialResult};
use url::Url;

/// Builds the probe URL by substituting the port into the template.
///
/// Substitution is a literal textual replacement of every occurrence of the
/// substring `port`, not a named-placeholder system. Known quirk, kept for
/// compatibility: a template such as `http://portal.example.com:port/` is
/// mangled to `http://80al.example.com:80/` for port `80`, so callers must
/// choose templates where `port` appears only as the marker.
///
/// The substituted string must parse as a URL; the parser's canonical form
/// is what gets returned (default ports are elided, components may be
/// re-encoded).
///
/// # Errors
/// Returns `DialError::InvalidTargetUrl` with the attempted string and the
/// underlying parse error when the substituted template is not a valid URL.
pub fn build_target_url(template: &str, port: &str) -> DialResult<String> {
    let candidate = template.replace("port", port);
    let parsed = Url::parse(&candidate).map_err(|source| DialError::InvalidTargetUrl {
        attempted: candidate.clone(),
        source,
    })?;
    Ok(parsed.to_string())
}
