//! Hex address parsing.

use anyhow::{Context, Result};

/// Parse an address such as `0x1431B08A0` or `1431b08a0`.
pub fn parse_hex_address(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u64::from_str_radix(digits, 16).with_context(|| format!("Invalid hex address: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_prefix() {
        assert_eq!(parse_hex_address("0x1000").unwrap(), 0x1000);
        assert_eq!(parse_hex_address("0XC9F41FF5B0").unwrap(), 0xc9f41ff5b0);
    }

    #[test]
    fn test_parse_without_prefix() {
        assert_eq!(parse_hex_address("ff").unwrap(), 0xff);
        assert_eq!(parse_hex_address(" 10 ").unwrap(), 0x10);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_hex_address("0xZZ").is_err());
        assert!(parse_hex_address("").is_err());
        assert!(parse_hex_address("0x").is_err());
    }
}
