use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RpcError {
    #[error("node error {code}: {message}")]
    Node { code: i64, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("empty result")]
    EmptyResult,
}

#[derive(Serialize)]
struct RpcRequest<T> {
    jsonrpc: &'static str,
    id: u32,
    method: &'static str,
    params: T,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Serialize)]
struct CallObject<'a> {
    to: &'a str,
    data: &'a str,
}

/// Read-only `eth_call` against `to` with pre-encoded calldata.
/// Returns the raw hex result string.
pub async fn eth_call(rpc_url: &str, to: &str, data: &str) -> Result<String, RpcError> {
    let params = (CallObject { to, data }, "latest");
    let req = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method: "eth_call",
        params,
    };

    let resp = Request::post(rpc_url)
        .json(&req)
        .map_err(|e| RpcError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| RpcError::Transport(e.to_string()))?;

    let body: RpcResponse<String> = resp
        .json()
        .await
        .map_err(|e| RpcError::Transport(e.to_string()))?;
    if let Some(err) = body.error {
        return Err(RpcError::Node {
            code: err.code,
            message: err.message,
        });
    }
    body.result.ok_or(RpcError::EmptyResult)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_jsonrpc_wire_shape() {
        let req = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_call",
            params: (
                CallObject {
                    to: "0x9bD27c3A181c3B27B0574279FD3e5e20b29B2cBb",
                    data: "0x1e4f420d",
                },
                "latest",
            ),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["method"], "eth_call");
        assert_eq!(json["params"][0]["data"], "0x1e4f420d");
        assert_eq!(json["params"][1], "latest");
    }

    #[test]
    fn node_errors_deserialize_alongside_missing_results() {
        let body: RpcResponse<String> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#,
        )
        .unwrap();
        let err = body.error.unwrap();
        assert_eq!(err.code, -32000);
        assert_eq!(err.message, "execution reverted");
        assert!(body.result.is_none());
    }
}
