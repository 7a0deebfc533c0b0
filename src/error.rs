//! Error types for wasm-erc20

use core::fmt;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-erc20 operations
#[derive(Debug, Clone)]
pub enum WasmErc20Error {
    /// No injected wallet provider (`window.ethereum`) found
    ProviderAbsent,
    /// Operation requires a connected wallet session
    NotConnected,
    /// Invalid 0x-hex account address
    InvalidAddress(String),
    /// Invalid decimal token amount
    InvalidAmount(String),
    /// Wallet provider request failure (transport, user rejection, RPC error)
    Provider(String),
    /// Contract return data could not be decoded
    AbiDecode(String),
    /// Transaction was mined but reverted
    TxReverted(String),
    /// Generic string error
    StringError(String),
}

impl std::error::Error for WasmErc20Error {}

impl fmt::Display for WasmErc20Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WasmErc20Error::ProviderAbsent => write!(f, "No wallet provider present"),
            WasmErc20Error::NotConnected => write!(f, "Wallet not connected"),
            WasmErc20Error::InvalidAddress(s) => write!(f, "Invalid address: {}", s),
            WasmErc20Error::InvalidAmount(s) => write!(f, "Invalid amount: {}", s),
            WasmErc20Error::Provider(s) => write!(f, "Provider request failed: {}", s),
            WasmErc20Error::AbiDecode(s) => write!(f, "ABI decode error: {}", s),
            WasmErc20Error::TxReverted(s) => write!(f, "Transaction reverted: {}", s),
            WasmErc20Error::StringError(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for WasmErc20Error {
    fn from(s: &str) -> Self {
        WasmErc20Error::StringError(s.to_string())
    }
}

impl From<String> for WasmErc20Error {
    fn from(s: String) -> Self {
        WasmErc20Error::StringError(s)
    }
}

impl From<alloy_sol_types::Error> for WasmErc20Error {
    fn from(err: alloy_sol_types::Error) -> Self {
        WasmErc20Error::AbiDecode(err.to_string())
    }
}

impl From<hex::FromHexError> for WasmErc20Error {
    fn from(err: hex::FromHexError) -> Self {
        WasmErc20Error::AbiDecode(err.to_string())
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmErc20Error> for JsValue {
    fn from(err: WasmErc20Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WasmErc20Error::InvalidAddress("not hex".to_string());
        assert_eq!(err.to_string(), "Invalid address: not hex");
        assert_eq!(
            WasmErc20Error::ProviderAbsent.to_string(),
            "No wallet provider present"
        );
    }

    #[test]
    fn test_from_str() {
        let err: WasmErc20Error = "test error".into();
        assert_eq!(err.to_string(), "test error");
    }
}
