use crate::core::domain::error::{DialError, DialResult};

/// Extracts the port token from a `host:port` public address.
///
/// Addresses may contain more than one colon (IPv6-style or annotated
/// forms); the last colon-delimited segment wins. The token is returned as
/// an opaque string and is never validated as a number — the upstream
/// contract is permissive here.
///
/// # Errors
/// Returns `DialError::MalformedAddress` naming the input when it contains
/// no colon at all.
pub fn extract_port(public_addr: &str) -> DialResult<String> {
    match public_addr.rsplit_once(':') {
        Some((_, port)) => Ok(port.to_string()),
        None => Err(DialError::MalformedAddress(public_addr.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_port_host_port() {
        assert_eq!(extract_port("203.0.113.5:51413").unwrap(), "51413");
    }

    #[test]
    fn test_extract_port_last_segment_wins() {
        // Multiple colons: only the segment after the last one matters.
        assert_eq!(extract_port("2001:db8::1:9999").unwrap(), "9999");
        assert_eq!(extract_port("host:annotation:8080").unwrap(), "8080");
    }

    #[test]
    fn test_extract_port_no_colon_fails() {
        let err = extract_port("noaddresshere").unwrap_err();
        assert!(matches!(err, DialError::MalformedAddress(_)));
        assert!(err.to_string().contains("noaddresshere"));
    }

    #[test]
    fn test_extract_port_is_not_numerically_validated() {
        // Deliberately permissive: the token is opaque.
        assert_eq!(extract_port("host:not-a-number").unwrap(), "not-a-number");
        assert_eq!(extract_port("host:").unwrap(), "");
    }
}
