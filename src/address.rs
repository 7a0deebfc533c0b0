//! Ethereum account address parsing and comparison.

use std::str::FromStr;

use alloy_primitives::Address;

use crate::error::WasmErc20Error;

/// Parse a 0x-hex account address.
///
/// Accepts any hex casing; checksum is not enforced, matching what wallet
/// providers return.
pub fn parse_address(address: &str) -> Result<Address, WasmErc20Error> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(WasmErc20Error::InvalidAddress("empty address".to_string()));
    }
    Address::from_str(trimmed)
        .map_err(|e| WasmErc20Error::InvalidAddress(format!("{}: {}", trimmed, e)))
}

/// Case-insensitive address equality.
///
/// False when either side fails to parse, so a disconnected or garbled
/// account never compares equal to anything.
pub fn addresses_match(a: &str, b: &str) -> bool {
    match (parse_address(a), parse_address(b)) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_OWNER: &str = "0x9e4deb5f6f6ac367a7929cdb2e976ae97b537fb8";

    #[test]
    fn test_parse_address_accepts_any_case() {
        let lower = parse_address(TOKEN_OWNER).unwrap();
        let upper = parse_address(&TOKEN_OWNER.to_uppercase().replace("0X", "0x")).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_parse_address_rejects_junk() {
        assert!(parse_address("").is_err());
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("not an address").is_err());
    }

    #[test]
    fn test_addresses_match_is_case_insensitive() {
        let upper = TOKEN_OWNER.to_uppercase().replace("0X", "0x");
        assert!(addresses_match(TOKEN_OWNER, &upper));
        assert!(addresses_match(&upper, TOKEN_OWNER));
    }

    #[test]
    fn test_addresses_match_rejects_mismatch_and_junk() {
        assert!(!addresses_match(
            TOKEN_OWNER,
            "0x0000000000000000000000000000000000000001"
        ));
        assert!(!addresses_match(TOKEN_OWNER, ""));
        assert!(!addresses_match("garbage", "garbage"));
    }
}
