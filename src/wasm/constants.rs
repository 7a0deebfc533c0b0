//! Deployment constants exported via WASM.
//!
//! These let JavaScript code reference the deployed token and the bridge's
//! user-facing strings without duplicating them page-side.

use alloy_primitives::{address, Address};
use wasm_bindgen::prelude::*;

/// Address of the deployed token contract.
pub const DEFAULT_CONTRACT_ADDRESS: Address =
    address!("9e4deb5f6f6ac367a7929cdb2e976ae97b537fb8");

/// User-facing message shown when no wallet extension is injected.
pub const INSTALL_WALLET_MESSAGE: &str = "Install a MetaMask wallet to get our token.";

/// Receipt poll cadence while awaiting confirmation.
pub const RECEIPT_POLL_INTERVAL_MS: i32 = 2_000;

/// Deployed token contract address
#[wasm_bindgen]
pub fn default_contract_address() -> String {
    DEFAULT_CONTRACT_ADDRESS.to_string()
}

/// Install-wallet message text
#[wasm_bindgen]
pub fn install_wallet_message() -> String {
    INSTALL_WALLET_MESSAGE.to_string()
}

/// Token decimal exponent (18)
#[wasm_bindgen]
pub fn token_decimals() -> u8 {
    crate::units::TOKEN_DECIMALS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_address_round_trips() {
        assert_eq!(
            default_contract_address().to_lowercase(),
            "0x9e4deb5f6f6ac367a7929cdb2e976ae97b537fb8"
        );
    }
}
