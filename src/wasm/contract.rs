//! Read/write handle to the deployed token contract.
//!
//! Reads go through `eth_call` with ABI-encoded calldata; writes go through
//! `eth_sendTransaction` so the wallet signs with the connected account, and
//! are awaited to a mined receipt.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

use crate::abi::{self, MemeCoin};
use crate::error::WasmErc20Error;
use crate::rpc::{CallRequest, TransactionReceipt, TransactionRequest, LATEST_BLOCK};
use crate::session::TokenSnapshot;
use crate::units;

use super::constants::RECEIPT_POLL_INTERVAL_MS;
use super::convert::to_js;
use super::provider::{sleep_ms, Eip1193Provider};

/// Remote contract handle, bound to one detected provider.
pub struct TokenContract {
    provider: Eip1193Provider,
    address: Address,
}

impl TokenContract {
    pub fn new(provider: Eip1193Provider, address: Address) -> Self {
        Self { provider, address }
    }

    /// Token display name.
    pub async fn name(&self) -> Result<String, WasmErc20Error> {
        self.call(MemeCoin::nameCall {}).await
    }

    /// Ticker symbol.
    pub async fn symbol(&self) -> Result<String, WasmErc20Error> {
        self.call(MemeCoin::symbolCall {}).await
    }

    /// The contract's recorded owner account.
    pub async fn owner(&self) -> Result<Address, WasmErc20Error> {
        self.call(MemeCoin::ownerCall {}).await
    }

    /// Total supply in smallest units.
    pub async fn total_supply(&self) -> Result<U256, WasmErc20Error> {
        self.call(MemeCoin::totalSupplyCall {}).await
    }

    /// Total supply as a human-scaled decimal string.
    pub async fn total_supply_decimal(&self) -> Result<String, WasmErc20Error> {
        units::format_amount(self.total_supply().await?)
    }

    /// Fetch the wholesale token snapshot: name, symbol, owner, scaled
    /// supply. Fails as a unit; callers keep their previous snapshot on any
    /// error.
    pub async fn snapshot(&self) -> Result<TokenSnapshot, WasmErc20Error> {
        let name = self.name().await?;
        let symbol = self.symbol().await?;
        let owner = self.owner().await?;
        let supply = self.total_supply().await?;
        Ok(TokenSnapshot {
            name,
            symbol,
            total_supply_decimal: units::format_amount(supply)?,
            owner_address: Some(owner.to_string()),
        })
    }

    /// Submit a transfer signed by `from`. Returns the transaction hash.
    pub async fn transfer(
        &self,
        from: &str,
        recipient: Address,
        amount: U256,
    ) -> Result<String, WasmErc20Error> {
        self.send(from, &MemeCoin::transferCall { recipient, amount })
            .await
    }

    /// Submit a burn of `from`'s own holdings. Returns the transaction hash.
    pub async fn burn(&self, from: &str, amount: U256) -> Result<String, WasmErc20Error> {
        self.send(from, &MemeCoin::burnCall { amount }).await
    }

    /// Submit a mint crediting `account`. Permission is enforced by the
    /// contract alone. Returns the transaction hash.
    pub async fn mint(
        &self,
        from: &str,
        account: Address,
        amount: U256,
    ) -> Result<String, WasmErc20Error> {
        self.send(from, &MemeCoin::mintCall { account, amount }).await
    }

    /// Poll for the mined receipt. Blocks until the chain answers or the
    /// provider errors; a receipt with revert status is an error.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: &str,
    ) -> Result<TransactionReceipt, WasmErc20Error> {
        loop {
            let params = to_js(&(tx_hash,))?;
            let result = self
                .provider
                .request("eth_getTransactionReceipt", &params)
                .await?;
            let receipt: Option<TransactionReceipt> = serde_wasm_bindgen::from_value(result)
                .map_err(|e| WasmErc20Error::Provider(format!("bad receipt response: {}", e)))?;
            if let Some(receipt) = receipt {
                if receipt.reverted() {
                    return Err(WasmErc20Error::TxReverted(tx_hash.to_string()));
                }
                return Ok(receipt);
            }
            sleep_ms(RECEIPT_POLL_INTERVAL_MS).await;
        }
    }

    async fn call<C: SolCall>(&self, call: C) -> Result<C::Return, WasmErc20Error> {
        let request = CallRequest {
            to: self.address.to_string(),
            data: abi::encode_calldata(&call),
        };
        let params = to_js(&(request, LATEST_BLOCK))?;
        let result = self.provider.request("eth_call", &params).await?;
        let raw = result.as_string().ok_or_else(|| {
            WasmErc20Error::AbiDecode("eth_call returned a non-string result".to_string())
        })?;
        abi::decode_return::<C>(&raw)
    }

    async fn send<C: SolCall>(&self, from: &str, call: &C) -> Result<String, WasmErc20Error> {
        let request = TransactionRequest {
            from: from.to_string(),
            to: self.address.to_string(),
            data: abi::encode_calldata(call),
        };
        let params = to_js(&(request,))?;
        let result = self.provider.request("eth_sendTransaction", &params).await?;
        result.as_string().ok_or_else(|| {
            WasmErc20Error::Provider("eth_sendTransaction returned a non-string hash".to_string())
        })
    }
}
