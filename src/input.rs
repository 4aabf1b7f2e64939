//! Validation of user-supplied lookup targets.

use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::LookupError;

/// Dotted-quad IPv4 (octets 0-255) or uncompressed eight-group IPv6.
static IP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$|^(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}$",
    )
    .expect("IP pattern is a valid regex")
});

/// Checks a lookup target typed by the user.
///
/// Returns `Ok(None)` for blank input (look up the caller's own address),
/// `Ok(Some(ip))` with surrounding whitespace removed for a valid address.
///
/// Only the full eight-group IPv6 form is accepted; compressed forms such as
/// `2001:db8::1` are rejected, matching what the lookup form has always allowed.
///
/// # Errors
///
/// Returns `LookupError::InvalidInput` for anything else.
pub fn validate_ip_input(input: &str) -> Result<Option<String>, LookupError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if IP_PATTERN.is_match(trimmed) {
        Ok(Some(trimmed.to_string()))
    } else {
        Err(LookupError::InvalidInput(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_means_own_address() {
        assert_eq!(validate_ip_input(""), Ok(None));
        assert_eq!(validate_ip_input("   \t"), Ok(None));
    }

    #[test]
    fn test_valid_ipv4() {
        for ip in ["8.8.8.8", "0.0.0.0", "255.255.255.255", "10.0.0.1", "192.168.001.010"] {
            assert_eq!(validate_ip_input(ip), Ok(Some(ip.to_string())), "{}", ip);
        }
        assert_eq!(
            validate_ip_input("  1.1.1.1\n"),
            Ok(Some("1.1.1.1".to_string()))
        );
    }

    #[test]
    fn test_invalid_ipv4() {
        for ip in ["256.1.1.1", "1.1.1", "1.1.1.1.1", "999.999.999.999", "a.b.c.d", "1.1.1.1/24"] {
            assert!(
                matches!(validate_ip_input(ip), Err(LookupError::InvalidInput(_))),
                "{} should be rejected",
                ip
            );
        }
    }

    #[test]
    fn test_full_ipv6_only() {
        assert!(validate_ip_input("2001:0db8:85a3:0000:0000:8a2e:0370:7334").is_ok());
        assert!(validate_ip_input("2001:db8:85a3:0:0:8a2e:370:7334").is_ok());
        assert!(validate_ip_input("2001:db8::1").is_err());
        assert!(validate_ip_input("::1").is_err());
        assert!(validate_ip_input("2001:db8:85a3:0:0:8a2e:370:7334:1").is_err());
    }

    #[test]
    fn test_hostnames_rejected() {
        assert!(validate_ip_input("example.com").is_err());
        assert!(validate_ip_input("localhost").is_err());
    }
}
