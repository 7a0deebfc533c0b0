//! Conversion of serde types into plain JS values.
//!
//! Wallet providers reject `Map`-based payloads, so everything crossing into
//! JS is serialized in JSON-compatible mode (plain objects and arrays).

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::error::WasmErc20Error;

/// Serialize a value to a plain JS object/array.
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, WasmErc20Error> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| WasmErc20Error::Provider(format!("serialization failed: {}", e)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::rpc::CallRequest;

    #[wasm_bindgen_test]
    fn test_to_js_produces_plain_objects() {
        let request = CallRequest {
            to: "0x9e4deb5f6f6ac367a7929cdb2e976ae97b537fb8".to_string(),
            data: "0x18160ddd".to_string(),
        };
        let value = to_js(&request).unwrap();
        // Providers reject Map payloads; the value must be a plain object.
        assert!(value.is_object());
        assert!(!value.is_instance_of::<js_sys::Map>());
        let data = js_sys::Reflect::get(&value, &"data".into()).unwrap();
        assert_eq!(data.as_string().as_deref(), Some("0x18160ddd"));
    }
}
