//! Token contract interface bindings.
//!
//! The contract is external and pre-deployed; this module declares the call
//! surface the bridge uses and the calldata helpers around it. Amounts are
//! always in the smallest unit (see [`crate::units`]).

use alloy_sol_types::{sol, SolCall};

use crate::error::WasmErc20Error;

sol! {
    /// ERC20-style token with owner-gated supply management.
    interface MemeCoin {
        /// Token display name
        function name() external view returns (string);

        /// Ticker symbol
        function symbol() external view returns (string);

        /// Account that deployed and administers the token
        function owner() external view returns (address);

        /// Total supply in smallest units
        function totalSupply() external view returns (uint256);

        /// Move tokens from the caller to `recipient`
        function transfer(address recipient, uint256 amount) external returns (bool);

        /// Destroy `amount` of the caller's own tokens
        function burn(uint256 amount) external;

        /// Create `amount` new tokens credited to `account`
        function mint(address account, uint256 amount) external;
    }
}

/// ABI-encode a call to 0x-prefixed calldata hex.
pub fn encode_calldata<C: SolCall>(call: &C) -> String {
    format!("0x{}", hex::encode(call.abi_encode()))
}

/// Decode an `eth_call` result payload into the call's return value.
pub fn decode_return<C: SolCall>(data: &str) -> Result<C::Return, WasmErc20Error> {
    let bytes = decode_hex(data)?;
    C::abi_decode_returns(&bytes).map_err(|e| WasmErc20Error::AbiDecode(e.to_string()))
}

/// Decode a 0x-prefixed (or bare) hex payload.
pub fn decode_hex(data: &str) -> Result<Vec<u8>, WasmErc20Error> {
    let stripped = data.strip_prefix("0x").unwrap_or(data);
    Ok(hex::decode(stripped)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use rstest::rstest;
    use std::str::FromStr;

    const RECIPIENT: &str = "0x9e4deb5f6f6ac367a7929cdb2e976ae97b537fb8";

    #[rstest]
    #[case(MemeCoin::nameCall::SELECTOR, "06fdde03")]
    #[case(MemeCoin::symbolCall::SELECTOR, "95d89b41")]
    #[case(MemeCoin::ownerCall::SELECTOR, "8da5cb5b")]
    #[case(MemeCoin::totalSupplyCall::SELECTOR, "18160ddd")]
    #[case(MemeCoin::transferCall::SELECTOR, "a9059cbb")]
    #[case(MemeCoin::burnCall::SELECTOR, "42966c68")]
    #[case(MemeCoin::mintCall::SELECTOR, "40c10f19")]
    fn test_selectors(#[case] selector: [u8; 4], #[case] expected: &str) {
        assert_eq!(hex::encode(selector), expected);
    }

    #[test]
    fn test_signatures() {
        assert_eq!(MemeCoin::transferCall::SIGNATURE, "transfer(address,uint256)");
        assert_eq!(MemeCoin::burnCall::SIGNATURE, "burn(uint256)");
        assert_eq!(MemeCoin::mintCall::SIGNATURE, "mint(address,uint256)");
    }

    #[test]
    fn test_encode_transfer_calldata() {
        let call = MemeCoin::transferCall {
            recipient: Address::from_str(RECIPIENT).unwrap(),
            amount: U256::from(10).pow(U256::from(18)),
        };
        let expected = concat!(
            "0xa9059cbb",
            "0000000000000000000000009e4deb5f6f6ac367a7929cdb2e976ae97b537fb8",
            "0000000000000000000000000000000000000000000000000de0b6b3a7640000",
        );
        assert_eq!(encode_calldata(&call), expected);
    }

    #[test]
    fn test_encode_burn_calldata() {
        let call = MemeCoin::burnCall {
            amount: U256::from(1),
        };
        let expected = concat!(
            "0x42966c68",
            "0000000000000000000000000000000000000000000000000000000000000001",
        );
        assert_eq!(encode_calldata(&call), expected);
    }

    #[test]
    fn test_decode_total_supply_return() {
        let payload = "0x00000000000000000000000000000000000000000000003635c9adc5dea00000";
        let supply = decode_return::<MemeCoin::totalSupplyCall>(payload).unwrap();
        // 1000 tokens at 18 decimals
        assert_eq!(
            supply,
            U256::from_str_radix("1000000000000000000000", 10).unwrap()
        );
    }

    #[test]
    fn test_decode_symbol_return() {
        let payload = concat!(
            "0x0000000000000000000000000000000000000000000000000000000000000020",
            "0000000000000000000000000000000000000000000000000000000000000004",
            "41524d4300000000000000000000000000000000000000000000000000000000",
        );
        let symbol = decode_return::<MemeCoin::symbolCall>(payload).unwrap();
        assert_eq!(symbol, "ARMC");
    }

    #[test]
    fn test_decode_owner_return() {
        let payload = "0x0000000000000000000000009e4deb5f6f6ac367a7929cdb2e976ae97b537fb8";
        let owner = decode_return::<MemeCoin::ownerCall>(payload).unwrap();
        assert_eq!(owner, Address::from_str(RECIPIENT).unwrap());
    }

    #[test]
    fn test_decode_hex_rejects_junk() {
        assert!(decode_hex("0xzz").is_err());
        assert!(decode_return::<MemeCoin::totalSupplyCall>("0x00").is_err());
    }
}
