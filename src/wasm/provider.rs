//! EIP-1193 wallet provider bridge.
//!
//! Wraps the browser-injected `window.ethereum` object. Absence of the
//! provider is a reported, non-fatal condition; all traffic goes through the
//! provider's `request({ method, params })` promise, signed reads and writes
//! included.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::WasmErc20Error;

/// Key the wallet extension injects itself under on `window`.
const PROVIDER_KEY: &str = "ethereum";

/// Handle to the injected EIP-1193 provider.
pub struct Eip1193Provider {
    inner: Object,
}

impl Eip1193Provider {
    /// Look up the injected provider.
    ///
    /// `Err(ProviderAbsent)` when the page has no wallet extension.
    pub fn detect() -> Result<Self, WasmErc20Error> {
        let window = web_sys::window().ok_or(WasmErc20Error::ProviderAbsent)?;
        let provider = Reflect::get(&window, &JsValue::from_str(PROVIDER_KEY))
            .map_err(|_| WasmErc20Error::ProviderAbsent)?;
        if provider.is_undefined() || provider.is_null() {
            return Err(WasmErc20Error::ProviderAbsent);
        }
        provider
            .dyn_into::<Object>()
            .map(|inner| Self { inner })
            .map_err(|_| WasmErc20Error::ProviderAbsent)
    }

    /// Send `request({ method, params })` and await the response.
    pub async fn request(&self, method: &str, params: &JsValue) -> Result<JsValue, WasmErc20Error> {
        let args = Object::new();
        Reflect::set(&args, &"method".into(), &JsValue::from_str(method))
            .map_err(provider_error)?;
        if !params.is_undefined() {
            Reflect::set(&args, &"params".into(), params).map_err(provider_error)?;
        }

        let request_fn = Reflect::get(&self.inner, &"request".into()).map_err(provider_error)?;
        let request_fn: Function = request_fn.dyn_into().map_err(|_| {
            WasmErc20Error::Provider("provider has no request() method".to_string())
        })?;

        let pending = request_fn
            .call1(&self.inner, &args.into())
            .map_err(provider_error)?;
        let promise: Promise = pending.dyn_into().map_err(|_| {
            WasmErc20Error::Provider("request() did not return a promise".to_string())
        })?;

        JsFuture::from(promise).await.map_err(provider_error)
    }

    /// `eth_requestAccounts`: trigger the wallet's authorization prompt and
    /// return the authorized account addresses.
    pub async fn request_accounts(&self) -> Result<Vec<String>, WasmErc20Error> {
        let result = self.request("eth_requestAccounts", &JsValue::UNDEFINED).await?;
        serde_wasm_bindgen::from_value(result)
            .map_err(|e| WasmErc20Error::Provider(format!("bad accounts response: {}", e)))
    }
}

/// Extract a readable message from a rejected provider value.
fn provider_error(value: JsValue) -> WasmErc20Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| {
            Reflect::get(&value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value));
    WasmErc20Error::Provider(message)
}

/// Resolve after `ms` milliseconds on the page's timer.
///
/// Used for receipt polling; confirmation waiting has no local timeout, so
/// this is the only pacing between polls.
pub async fn sleep_ms(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}
