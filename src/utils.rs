use alloy::primitives::{Address, B256, U256};
use chrono::{DateTime, Utc};

/// Truncate an address to "0xabcd...ef12" format
pub fn truncate_address(addr: &Address) -> String {
    let s = format!("{addr}");
    if s.len() > 14 {
        format!("{}...{}", &s[..8], &s[s.len() - 4..])
    } else {
        s
    }
}

/// Truncate a B256 hash to "0xabcd...ef12" format
pub fn truncate_hash(hash: &B256) -> String {
    let s = format!("{hash}");
    if s.len() > 14 {
        format!("{}...{}", &s[..8], &s[s.len() - 4..])
    } else {
        s
    }
}

/// Parse a wallet address from form input. Expects the usual
/// 0x-prefixed 40-hex-digit form; anything else is rejected with a
/// message suitable for the status line.
pub fn parse_address(input: &str) -> Result<Address, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Please enter a wallet address.".to_string());
    }
    if !input.starts_with("0x") || input.len() != 42 {
        return Err(format!("'{input}' is not a valid address."));
    }
    input
        .parse::<Address>()
        .map_err(|_| format!("'{input}' is not a valid address."))
}

/// Parse a payment amount in wei from form input.
pub fn parse_wei(input: &str) -> Result<U256, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Please enter an amount.".to_string());
    }
    U256::from_str_radix(input, 10)
        .map_err(|_| format!("'{input}' is not a valid wei amount."))
}

/// Format a U256 wei value as ETH with reasonable precision
pub fn format_eth(wei: U256) -> String {
    let eth_str = format_u256_as_decimal(wei, 18);
    format!("{eth_str} ETH")
}

/// Format a U256 value as decimal with given decimals
pub fn format_u256_as_decimal(value: U256, decimals: u8) -> String {
    if value.is_zero() {
        return "0.0".to_string();
    }

    let divisor = U256::from(10u64).pow(U256::from(decimals));
    let whole = value / divisor;
    let remainder = value % divisor;

    if remainder.is_zero() {
        return format!("{whole}.0");
    }

    let remainder_str = format!("{remainder}");
    let padded = format!("{:0>width$}", remainder_str, width = decimals as usize);
    let trimmed = padded.trim_end_matches('0');

    // Limit to 6 decimal places
    let decimals_shown = trimmed.len().min(6);
    format!("{whole}.{}", &trimmed[..decimals_shown])
}

/// Format a number with comma separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a Unix timestamp as "Xm ago", "Xh ago", etc.
pub fn format_time_ago(timestamp: u64) -> String {
    let now = Utc::now().timestamp() as u64;
    if timestamp > now {
        return "just now".to_string();
    }
    let diff = now - timestamp;
    if diff < 60 {
        format!("{diff}s ago")
    } else if diff < 3600 {
        format!("{}m ago", diff / 60)
    } else if diff < 86400 {
        format!("{}h ago", diff / 3600)
    } else {
        format!("{}d ago", diff / 86400)
    }
}

/// Format a Unix timestamp as a datetime string
pub fn format_timestamp(timestamp: u64) -> String {
    DateTime::from_timestamp(timestamp as i64, 0)
        .map(|dt| dt.format("%b %d, %Y %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_valid() {
        let result = parse_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_address_trims_whitespace() {
        let result = parse_address("  0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045  ");
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_address_empty() {
        let err = parse_address("").unwrap_err();
        assert!(err.contains("enter a wallet address"));
    }

    #[test]
    fn test_parse_address_missing_prefix() {
        assert!(parse_address("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045").is_err());
    }

    #[test]
    fn test_parse_address_wrong_length() {
        assert!(parse_address("0xabcdef").is_err());
    }

    #[test]
    fn test_parse_address_non_hex() {
        assert!(parse_address("0xZZdA6BF26964aF9D7eEd9e03E53415D37aA96045").is_err());
    }

    #[test]
    fn test_parse_wei_valid() {
        assert_eq!(parse_wei("1000"), Ok(U256::from(1000u64)));
    }

    #[test]
    fn test_parse_wei_empty() {
        let err = parse_wei("").unwrap_err();
        assert!(err.contains("enter an amount"));
    }

    #[test]
    fn test_parse_wei_not_a_number() {
        assert!(parse_wei("1.5 ETH").is_err());
        assert!(parse_wei("-3").is_err());
    }

    #[test]
    fn test_truncate_address() {
        let addr: Address = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
            .parse()
            .unwrap();
        let s = truncate_address(&addr);
        assert!(s.starts_with("0x"));
        assert!(s.contains("..."));
        assert_eq!(s.len(), 15);
    }

    #[test]
    fn test_format_eth_zero() {
        assert_eq!(format_eth(U256::ZERO), "0.0 ETH");
    }

    #[test]
    fn test_format_eth_one() {
        let one_eth = U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(format_eth(one_eth), "1.0 ETH");
    }

    #[test]
    fn test_format_u256_as_decimal_fraction() {
        // 1.5 with 18 decimals
        let value = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(format_u256_as_decimal(value, 18), "1.5");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }
}
