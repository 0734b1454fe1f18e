use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::errors::RpcError;
use crate::node::NodeSettings;

/// Anything that can answer a node RPC call.
pub trait RpcClient: Send + Sync + 'static {
    fn call(&self, method: &str, params: Vec<Value>) -> BoxFuture<'static, Result<Value, RpcError>>;
}

#[derive(Debug, Serialize)]
struct RpcRequest {
    method: String,
    params: Vec<Value>,
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    code: i64,
    message: String,
}

impl RpcResponse {
    fn into_result(self, method: &str) -> Result<Value, RpcError> {
        if let Some(error) = self.error {
            return Err(RpcError::Node {
                method: method.to_string(),
                code: error.code,
                message: error.message,
            });
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// JSON-RPC over HTTP against the address currently held in [`NodeSettings`].
pub struct HttpRpcClient {
    http: reqwest::Client,
    node: NodeSettings,
    api_key: Option<String>,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    pub fn new(
        node: NodeSettings,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RpcError::ClientBuildFailed {
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            node,
            api_key,
            next_id: AtomicU64::new(1),
        })
    }

    fn request(&self, method: &str, params: Vec<Value>) -> RpcRequest {
        RpcRequest {
            method: method.to_string(),
            params,
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            key: self.api_key.clone(),
        }
    }
}

impl RpcClient for HttpRpcClient {
    fn call(&self, method: &str, params: Vec<Value>) -> BoxFuture<'static, Result<Value, RpcError>> {
        let http = self.http.clone();
        // Read at call time so a saved address applies to the next request.
        let url = self.node.url();
        let request = self.request(method, params);

        async move {
            debug!(
                event = "core.rpc.call_started",
                method = request.method.as_str(),
                id = request.id,
                url = url.as_str()
            );

            let response = http
                .post(&url)
                .json(&request)
                .send()
                .await
                .map_err(|e| RpcError::Transport {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(RpcError::HttpStatus {
                    status: status.as_u16(),
                });
            }

            let body: RpcResponse =
                response
                    .json()
                    .await
                    .map_err(|e| RpcError::InvalidResponse {
                        message: e.to_string(),
                    })?;
            body.into_result(&request.method)
        }
        .boxed()
    }
}
