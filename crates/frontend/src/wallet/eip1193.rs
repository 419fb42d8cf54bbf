//! Browser binding for the injected `window.ethereum` provider.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::provider::{ProviderError, WalletProvider};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type Ethereum;

    #[wasm_bindgen(method, catch)]
    fn request(this: &Ethereum, args: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<Value>,
}

#[derive(Clone, Debug)]
pub struct Eip1193Provider {
    ethereum: Ethereum,
}

impl Eip1193Provider {
    /// Looks up `window.ethereum`. `None` when no wallet extension injected one.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(Self {
            ethereum: value.unchecked_into(),
        })
    }
}

fn error_from_js(err: JsValue) -> ProviderError {
    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as i64)
        .unwrap_or(ProviderError::INTERNAL);
    let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ProviderError::new(code, message)
}

#[async_trait(?Send)]
impl WalletProvider for Eip1193Provider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let args = RequestArguments {
            method,
            params: if params.is_null() { None } else { Some(params) },
        };
        let js_args = args
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::internal(format!("Failed to encode request: {}", e)))?;

        let promise = self.ethereum.request(&js_args).map_err(error_from_js)?;
        let result = JsFuture::from(promise).await.map_err(error_from_js)?;

        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result)
            .map_err(|e| ProviderError::internal(format!("Failed to decode response: {}", e)))
    }

    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
