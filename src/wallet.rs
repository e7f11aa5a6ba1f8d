use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalletError {
    #[error("no browser wallet found")]
    NoProvider,

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("wallet interop failure: {0}")]
    Interop(String),
}

/// `eth_sendTransaction` parameter object. Field names are the
/// provider's wire names, all already lowercase.
#[derive(Serialize, Clone, Debug)]
pub struct TransactionRequest {
    pub from: String,
    pub to: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Adapter over the injected EIP-1193 provider (`window.ethereum`).
pub struct EthereumWallet;

impl EthereumWallet {
    pub fn is_installed() -> bool {
        if let Some(window) = web_sys::window() {
            let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"));
            if let Ok(ethereum) = ethereum {
                return !ethereum.is_undefined() && !ethereum.is_null();
            }
        }
        false
    }

    fn provider() -> Result<JsValue, WalletError> {
        let window = web_sys::window().ok_or(WalletError::NoProvider)?;
        let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map_err(|_| WalletError::NoProvider)?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return Err(WalletError::NoProvider);
        }
        Ok(ethereum)
    }

    /// One `provider.request({method, params})` round trip.
    async fn request(method: &str, params: Option<js_sys::Array>) -> Result<JsValue, WalletError> {
        let ethereum = Self::provider()?;
        let request_fn = js_sys::Reflect::get(&ethereum, &JsValue::from_str("request"))
            .map_err(|_| WalletError::Interop("request method not found".to_string()))?;
        let request_fn: js_sys::Function = request_fn
            .dyn_into()
            .map_err(|_| WalletError::Interop("request is not a function".to_string()))?;

        let args = js_sys::Object::new();
        js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(|_| WalletError::Interop("failed to build request".to_string()))?;
        if let Some(params) = params {
            js_sys::Reflect::set(&args, &JsValue::from_str("params"), &params)
                .map_err(|_| WalletError::Interop("failed to build request".to_string()))?;
        }

        let result = request_fn
            .call1(&ethereum, &args)
            .map_err(|e| WalletError::Rejected(js_error_to_string(e)))?;
        let promise: js_sys::Promise = result
            .dyn_into()
            .map_err(|_| WalletError::Interop("request didn't return a promise".to_string()))?;

        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| WalletError::Rejected(js_error_to_string(e)))
    }

    /// `eth_requestAccounts`: prompts the wallet and returns the
    /// selected account address.
    pub async fn connect() -> Result<String, WalletError> {
        let result = Self::request("eth_requestAccounts", None).await?;
        let accounts: js_sys::Array = result
            .dyn_into()
            .map_err(|_| WalletError::Interop("accounts response is not an array".to_string()))?;
        accounts
            .get(0)
            .as_string()
            .map(|a| a.to_lowercase())
            .ok_or_else(|| WalletError::Rejected("no account authorized".to_string()))
    }

    /// Submits a signed transaction through the wallet, resolving to
    /// the transaction hash once the user approves.
    pub async fn send_transaction(tx: &TransactionRequest) -> Result<String, WalletError> {
        let tx_value = serde_wasm_bindgen::to_value(tx)
            .map_err(|e| WalletError::Interop(e.to_string()))?;
        let params = js_sys::Array::of1(&tx_value);
        let result = Self::request("eth_sendTransaction", Some(params)).await?;
        result
            .as_string()
            .ok_or_else(|| WalletError::Interop("transaction hash is not a string".to_string()))
    }
}

// EIP-1193 rejections are `{code, message}` objects; plain strings
// only show up from non-conforming providers.
fn js_error_to_string(e: JsValue) -> String {
    e.as_string()
        .or_else(|| {
            js_sys::Reflect::get(&e, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "request rejected".to_string())
}
