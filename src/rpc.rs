//! JSON-RPC payload types for the wallet provider transport.
//!
//! Only the shapes the bridge actually exchanges with the provider; field
//! names follow the Ethereum JSON-RPC wire format.

use serde::{Deserialize, Serialize};

/// Default block tag for read calls.
pub const LATEST_BLOCK: &str = "latest";

/// `eth_call` request object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// Contract address, 0x-prefixed
    pub to: String,
    /// ABI-encoded calldata, 0x-prefixed
    pub data: String,
}

/// `eth_sendTransaction` request object.
///
/// The wallet fills in gas, nonce and signature; the bridge only supplies
/// the signing account, the contract address and the calldata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Signing account, as returned by the wallet
    pub from: String,
    /// Contract address, 0x-prefixed
    pub to: String,
    /// ABI-encoded calldata, 0x-prefixed
    pub data: String,
}

/// Subset of `eth_getTransactionReceipt` the bridge inspects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    /// "0x1" success, "0x0" revert
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub block_number: Option<String>,
}

impl TransactionReceipt {
    /// Whether the mined transaction reverted.
    pub fn reverted(&self) -> bool {
        matches!(self.status.as_deref(), Some("0x0"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_serialize_to_wire_names() {
        let call = CallRequest {
            to: "0x9e4deb5f6f6ac367a7929cdb2e976ae97b537fb8".to_string(),
            data: "0x18160ddd".to_string(),
        };
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["to"], call.to);
        assert_eq!(json["data"], "0x18160ddd");

        let tx = TransactionRequest {
            from: "0xabc0000000000000000000000000000000000001".to_string(),
            to: call.to.clone(),
            data: "0x42966c68".to_string(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["from"], tx.from);
    }

    #[test]
    fn test_receipt_deserializes_from_node_payload() {
        // Receipts carry many more fields; unknown ones are ignored.
        let json = r#"{
            "transactionHash": "0x1111111111111111111111111111111111111111111111111111111111111111",
            "status": "0x1",
            "blockNumber": "0x10",
            "gasUsed": "0x5208",
            "logs": []
        }"#;
        let receipt: TransactionReceipt = serde_json::from_str(json).unwrap();
        assert!(!receipt.reverted());
        assert_eq!(receipt.block_number.as_deref(), Some("0x10"));
    }

    #[test]
    fn test_receipt_revert_status() {
        let json = r#"{"transactionHash": "0x22", "status": "0x0"}"#;
        let receipt: TransactionReceipt = serde_json::from_str(json).unwrap();
        assert!(receipt.reverted());

        // Missing status (pre-Byzantium node) is not treated as a revert.
        let json = r#"{"transactionHash": "0x22"}"#;
        let receipt: TransactionReceipt = serde_json::from_str(json).unwrap();
        assert!(!receipt.reverted());
    }
}
