//! The exported wallet/contract bridge.
//!
//! `WasmTokenBridge` is the JS-facing surface: it owns the UI state
//! container and runs each operation as an independent promise. Operations
//! are the containment boundary for failures - errors are logged to the
//! console, folded into the container where the original surface showed
//! them, and the promise resolves with the resulting state. Rejections never
//! cross an operation boundary.
//!
//! Concurrent submissions are not serialized: each promise proceeds
//! independently and whichever settles first updates the shared container.

use std::cell::RefCell;
use std::rc::Rc;

use alloy_primitives::Address;
use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::console;

use crate::address::parse_address;
use crate::error::WasmErc20Error;
use crate::session::{FormField, FormInput, SessionState, TokenSnapshot, TxState};
use crate::units;

use super::constants::{DEFAULT_CONTRACT_ADDRESS, INSTALL_WALLET_MESSAGE};
use super::contract::TokenContract;
use super::convert::to_js;
use super::provider::Eip1193Provider;

/// Everything the presentation layer renders.
#[derive(Debug, Clone, Default)]
struct BridgeState {
    session: SessionState,
    token: TokenSnapshot,
    form: FormInput,
    /// Most recent transaction state transition across operations.
    tx: TxState,
}

/// Shared single-threaded state container. Borrows are never held across a
/// suspension point; updates are whole-field replacements.
type SharedState = Rc<RefCell<BridgeState>>;

/// Listener invoked with each transaction state transition.
type StatusListener = Rc<RefCell<Option<Function>>>;

/// Browser bridge to the deployed token contract.
#[wasm_bindgen]
pub struct WasmTokenBridge {
    state: SharedState,
    on_status: StatusListener,
    contract_address: Address,
}

#[wasm_bindgen]
impl WasmTokenBridge {
    /// Bridge bound to the token at the default deployed address.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmTokenBridge {
        WasmTokenBridge {
            state: Rc::new(RefCell::new(BridgeState::default())),
            on_status: Rc::new(RefCell::new(None)),
            contract_address: DEFAULT_CONTRACT_ADDRESS,
        }
    }

    /// Bridge bound to a token at a caller-supplied address.
    #[wasm_bindgen]
    pub fn with_address(address: &str) -> Result<WasmTokenBridge, WasmErc20Error> {
        let contract_address = parse_address(address)?;
        Ok(WasmTokenBridge {
            contract_address,
            ..WasmTokenBridge::new()
        })
    }

    /// Register a listener invoked on every transaction state transition.
    ///
    /// Pass `null`/`undefined` to clear it.
    #[wasm_bindgen]
    pub fn set_on_status(&self, callback: Option<Function>) {
        *self.on_status.borrow_mut() = callback;
    }

    /// Current session state as a plain JS object.
    #[wasm_bindgen]
    pub fn session(&self) -> Result<JsValue, WasmErc20Error> {
        to_js(&self.state.borrow().session)
    }

    /// Current token snapshot as a plain JS object.
    #[wasm_bindgen]
    pub fn token_info(&self) -> Result<JsValue, WasmErc20Error> {
        to_js(&self.state.borrow().token)
    }

    /// Current form input as a plain JS object.
    #[wasm_bindgen]
    pub fn form_input(&self) -> Result<JsValue, WasmErc20Error> {
        to_js(&self.state.borrow().form)
    }

    /// Most recent transaction state as a plain JS object.
    #[wasm_bindgen]
    pub fn tx_status(&self) -> Result<JsValue, WasmErc20Error> {
        to_js(&self.state.borrow().tx)
    }

    /// Per-keystroke form update, keyed by the input's `name` attribute.
    #[wasm_bindgen]
    pub fn update_input(&self, field: &str, value: &str) -> Result<(), WasmErc20Error> {
        let field = FormField::parse(field)
            .ok_or_else(|| WasmErc20Error::StringError(format!("unknown form field: {}", field)))?;
        let mut state = self.state.borrow_mut();
        state.form = state.form.clone().with_field(field, value.to_string());
        Ok(())
    }

    /// Request account authorization from the wallet.
    ///
    /// Resolves with the updated session state; never rejects. A missing
    /// provider sets the visible install-wallet error and leaves the session
    /// disconnected.
    #[wasm_bindgen]
    pub fn connect_wallet(&self) -> Promise {
        let state = Rc::clone(&self.state);
        future_to_promise(async move {
            match connect(&state).await {
                Ok(account) => {
                    console::log_1(&format!("Account connected: {}", account).into());
                }
                Err(err) => {
                    log_contained(&err);
                    let mut s = state.borrow_mut();
                    s.session = apply_operation_failure(s.session.clone(), &err);
                }
            }
            let session = state.borrow().session.clone();
            to_js(&session).map_err(JsValue::from)
        })
    }

    /// Re-fetch the wholesale token snapshot.
    ///
    /// Requires a connected session; never triggers an authorization prompt.
    /// Resolves with the current snapshot - the previous one on failure.
    #[wasm_bindgen]
    pub fn refresh_token_info(&self) -> Promise {
        let state = Rc::clone(&self.state);
        let contract_address = self.contract_address;
        future_to_promise(async move {
            if let Err(err) = refresh(&state, contract_address).await {
                log_contained(&err);
            }
            let token = state.borrow().token.clone();
            to_js(&token).map_err(JsValue::from)
        })
    }

    /// Transfer `amount_decimal` tokens to `to_address` and await
    /// confirmation. Resolves with the terminal transaction state; never
    /// rejects.
    #[wasm_bindgen]
    pub fn transfer(&self, to_address: String, amount_decimal: String) -> Promise {
        let state = Rc::clone(&self.state);
        let on_status = Rc::clone(&self.on_status);
        let contract_address = self.contract_address;
        future_to_promise(async move {
            let result = run_transfer(
                &state,
                &on_status,
                contract_address,
                &to_address,
                &amount_decimal,
            )
            .await;
            settle(&state, &on_status, result)
        })
    }

    /// Burn `amount_decimal` of the connected account's tokens, await
    /// confirmation, then republish total supply. Resolves with the terminal
    /// transaction state; never rejects.
    #[wasm_bindgen]
    pub fn burn(&self, amount_decimal: String) -> Promise {
        let state = Rc::clone(&self.state);
        let on_status = Rc::clone(&self.on_status);
        let contract_address = self.contract_address;
        future_to_promise(async move {
            let result = run_burn(&state, &on_status, contract_address, &amount_decimal).await;
            settle(&state, &on_status, result)
        })
    }

    /// Mint `amount_decimal` new tokens credited to the contract's recorded
    /// owner, await confirmation, then republish total supply. Whether a
    /// non-owner may mint is enforced by the contract alone. Resolves with
    /// the terminal transaction state; never rejects.
    #[wasm_bindgen]
    pub fn mint(&self, amount_decimal: String) -> Promise {
        let state = Rc::clone(&self.state);
        let on_status = Rc::clone(&self.on_status);
        let contract_address = self.contract_address;
        future_to_promise(async move {
            let result = run_mint(&state, &on_status, contract_address, &amount_decimal).await;
            settle(&state, &on_status, result)
        })
    }
}

impl Default for WasmTokenBridge {
    fn default() -> Self {
        Self::new()
    }
}

async fn connect(state: &SharedState) -> Result<String, WasmErc20Error> {
    let provider = Eip1193Provider::detect()?;
    let accounts = provider.request_accounts().await?;
    let account = accounts
        .into_iter()
        .next()
        .ok_or_else(|| WasmErc20Error::Provider("wallet returned no accounts".to_string()))?;

    let mut s = state.borrow_mut();
    let owner = s.token.owner_address.clone();
    s.session = s
        .session
        .clone()
        .with_account(account.clone())
        .with_owner_recomputed(owner.as_deref());
    Ok(account)
}

async fn refresh(state: &SharedState, contract_address: Address) -> Result<(), WasmErc20Error> {
    let (contract, _) = contract_for(state, contract_address)?;
    let snapshot = contract.snapshot().await?;
    console::log_1(
        &format!(
            "Token: {} ({}), supply {}, owner {}",
            snapshot.name,
            snapshot.symbol,
            snapshot.total_supply_decimal,
            snapshot.owner_address.as_deref().unwrap_or("unknown"),
        )
        .into(),
    );

    let mut s = state.borrow_mut();
    let owner = snapshot.owner_address.clone();
    s.token = snapshot;
    s.session = s.session.clone().with_owner_recomputed(owner.as_deref());
    Ok(())
}

async fn run_transfer(
    state: &SharedState,
    on_status: &StatusListener,
    contract_address: Address,
    to_address: &str,
    amount_decimal: &str,
) -> Result<TxState, WasmErc20Error> {
    let recipient = parse_address(to_address)?;
    let amount = units::parse_amount(amount_decimal)?;
    let (contract, from) = contract_for(state, contract_address)?;

    let tx_hash = contract.transfer(&from, recipient, amount).await?;
    console::log_1(&"Transferring tokens...".into());
    publish_status(
        state,
        on_status,
        &TxState::Submitted {
            tx_hash: tx_hash.clone(),
        },
    );

    contract.wait_for_receipt(&tx_hash).await?;
    console::log_1(&format!("Tokens transferred: {}", tx_hash).into());
    // Supply is not re-read after a transfer; burn and mint republish it.
    Ok(TxState::Confirmed { tx_hash })
}

async fn run_burn(
    state: &SharedState,
    on_status: &StatusListener,
    contract_address: Address,
    amount_decimal: &str,
) -> Result<TxState, WasmErc20Error> {
    let amount = units::parse_amount(amount_decimal)?;
    let (contract, from) = contract_for(state, contract_address)?;

    let tx_hash = contract.burn(&from, amount).await?;
    console::log_1(&"Burning tokens...".into());
    publish_status(
        state,
        on_status,
        &TxState::Submitted {
            tx_hash: tx_hash.clone(),
        },
    );

    contract.wait_for_receipt(&tx_hash).await?;
    console::log_1(&format!("Tokens burned: {}", tx_hash).into());
    republish_supply(state, &contract).await;
    Ok(TxState::Confirmed { tx_hash })
}

async fn run_mint(
    state: &SharedState,
    on_status: &StatusListener,
    contract_address: Address,
    amount_decimal: &str,
) -> Result<TxState, WasmErc20Error> {
    let amount = units::parse_amount(amount_decimal)?;
    let (contract, from) = contract_for(state, contract_address)?;

    // Mint credits the contract's recorded owner, not necessarily the caller.
    let owner = contract.owner().await?;
    let tx_hash = contract.mint(&from, owner, amount).await?;
    console::log_1(&"Minting tokens...".into());
    publish_status(
        state,
        on_status,
        &TxState::Submitted {
            tx_hash: tx_hash.clone(),
        },
    );

    contract.wait_for_receipt(&tx_hash).await?;
    console::log_1(&format!("Tokens minted: {}", tx_hash).into());
    republish_supply(state, &contract).await;
    Ok(TxState::Confirmed { tx_hash })
}

/// Connection precondition shared by every read and write: the session must
/// have been explicitly connected, and the provider must still be present.
fn contract_for(
    state: &SharedState,
    contract_address: Address,
) -> Result<(TokenContract, String), WasmErc20Error> {
    let provider = Eip1193Provider::detect()?;
    let session = state.borrow().session.clone();
    if !session.wallet_connected {
        return Err(WasmErc20Error::NotConnected);
    }
    let from = session.own_address.ok_or(WasmErc20Error::NotConnected)?;
    Ok((TokenContract::new(provider, contract_address), from))
}

/// Re-fetch and republish total supply after a confirmed burn or mint. The
/// transaction already succeeded, so a failure here is only logged and the
/// previous supply value is retained.
async fn republish_supply(state: &SharedState, contract: &TokenContract) {
    match contract.total_supply_decimal().await {
        Ok(supply) => {
            let mut s = state.borrow_mut();
            s.token = s.token.clone().with_total_supply(supply);
        }
        Err(err) => log_contained(&err),
    }
}

/// Map an operation result to its terminal state, apply the install-wallet
/// error where the surface shows it, publish the transition, and resolve.
fn settle(
    state: &SharedState,
    on_status: &StatusListener,
    result: Result<TxState, WasmErc20Error>,
) -> Result<JsValue, JsValue> {
    let terminal = match result {
        Ok(tx_state) => tx_state,
        Err(err) => {
            log_contained(&err);
            {
                let mut s = state.borrow_mut();
                s.session = apply_operation_failure(s.session.clone(), &err);
            }
            TxState::Failed {
                reason: err.to_string(),
            }
        }
    };
    publish_status(state, on_status, &terminal);
    to_js(&terminal).map_err(JsValue::from)
}

/// Only the capability-absent condition is surfaced on the error slot; every
/// other failure stays contained in the log and the terminal tx state.
fn apply_operation_failure(session: SessionState, err: &WasmErc20Error) -> SessionState {
    if matches!(err, WasmErc20Error::ProviderAbsent) {
        session.with_error(INSTALL_WALLET_MESSAGE)
    } else {
        session
    }
}

/// Record a transition on the container and notify the listener.
fn publish_status(state: &SharedState, on_status: &StatusListener, status: &TxState) {
    state.borrow_mut().tx = status.clone();
    // Clone the listener out so a callback re-registering itself cannot
    // observe the borrow.
    let callback = on_status.borrow().as_ref().cloned();
    if let Some(callback) = callback {
        if let Ok(value) = to_js(status) {
            let _ = callback.call1(&JsValue::NULL, &value);
        }
    }
}

fn log_contained(err: &WasmErc20Error) {
    console::error_1(&err.to_string().into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_absent_sets_install_message_and_stays_disconnected() {
        let session = apply_operation_failure(SessionState::default(), &WasmErc20Error::ProviderAbsent);
        assert!(!session.wallet_connected);
        assert_eq!(session.last_error.as_deref(), Some(INSTALL_WALLET_MESSAGE));
    }

    #[test]
    fn test_other_failures_leave_error_slot_untouched() {
        let session = apply_operation_failure(SessionState::default(), &WasmErc20Error::NotConnected);
        assert_eq!(session.last_error, None);

        let session = apply_operation_failure(
            SessionState::default(),
            &WasmErc20Error::Provider("user rejected".to_string()),
        );
        assert_eq!(session.last_error, None);
    }
}
