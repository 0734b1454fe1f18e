use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde_json::Value;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use super::client::RpcClient;
use super::errors::RpcError;
use crate::poll::{FetchPair, Trigger};

/// Latest outcome of an RPC fetch.
///
/// A failed refresh keeps the previous `result` and records `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RpcState {
    pub result: Option<Value>,
    pub error: Option<String>,
    pub loading: bool,
}

#[derive(Default)]
struct Shared {
    state: RpcState,
    /// Generation of the newest refresh whose outcome was stored.
    applied: u64,
}

struct FetchInner {
    client: Arc<dyn RpcClient>,
    method: String,
    params: Vec<Value>,
    /// Generation handed to the most recently started refresh.
    started: AtomicU64,
    shared: RwLock<Shared>,
}

impl FetchInner {
    fn update(&self, f: impl FnOnce(&mut Shared)) {
        match self.shared.write() {
            Ok(mut shared) => f(&mut *shared),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }

    fn snapshot(&self) -> RpcState {
        match self.shared.read() {
            Ok(shared) => shared.state.clone(),
            Err(poisoned) => poisoned.into_inner().state.clone(),
        }
    }

    /// Run one call. Refreshes may overlap; an outcome older than one
    /// already stored is dropped, and `loading` clears only once the
    /// newest call has answered.
    async fn refresh(&self) -> RpcState {
        let generation = self.started.fetch_add(1, Ordering::SeqCst) + 1;
        self.update(|shared| shared.state.loading = true);

        let outcome = self.client.call(&self.method, self.params.clone()).await;
        self.update(|shared| {
            if generation <= shared.applied {
                debug!(
                    event = "core.rpc.fetch_stale_dropped",
                    method = self.method.as_str(),
                    generation = generation,
                    applied = shared.applied
                );
                return;
            }
            shared.applied = generation;
            if generation == self.started.load(Ordering::SeqCst) {
                shared.state.loading = false;
            }

            match outcome {
                Ok(value) => {
                    shared.state.result = Some(value);
                    shared.state.error = None;
                }
                Err(e) => {
                    warn!(
                        event = "core.rpc.fetch_failed",
                        method = self.method.as_str(),
                        error = %e
                    );
                    shared.state.error = Some(e.to_string());
                }
            }
        });
        self.snapshot()
    }
}

/// A fetch pair over one RPC method: current [`RpcState`] plus a trigger that
/// re-runs the call in the background.
#[derive(Clone)]
pub struct RpcFetch {
    inner: Arc<FetchInner>,
    runtime: Handle,
}

impl RpcFetch {
    pub fn new(
        runtime: Handle,
        client: Arc<dyn RpcClient>,
        method: impl Into<String>,
        params: Vec<Value>,
    ) -> Self {
        Self {
            inner: Arc::new(FetchInner {
                client,
                method: method.into(),
                params,
                started: AtomicU64::new(0),
                shared: RwLock::new(Shared::default()),
            }),
            runtime,
        }
    }

    pub fn method(&self) -> &str {
        &self.inner.method
    }

    pub fn state(&self) -> RpcState {
        self.inner.snapshot()
    }

    /// Spawn a refresh on the captured runtime; returns immediately.
    pub fn trigger(&self) -> Trigger {
        let inner = Arc::clone(&self.inner);
        let runtime = self.runtime.clone();
        Trigger::new(move || {
            let inner = Arc::clone(&inner);
            runtime.spawn(async move {
                inner.refresh().await;
            });
        })
    }

    pub fn pair(&self) -> FetchPair<RpcState> {
        FetchPair::new(self.state(), self.trigger())
    }

    /// Run the call now and wait for the resulting state.
    pub async fn refresh(&self) -> RpcState {
        self.inner.refresh().await
    }
}

/// Build an [`RpcFetch`] on the current tokio runtime.
pub fn use_rpc(
    client: Arc<dyn RpcClient>,
    method: impl Into<String>,
    params: Vec<Value>,
) -> Result<RpcFetch, RpcError> {
    let runtime = Handle::try_current().map_err(|_| RpcError::NoRuntime)?;
    Ok(RpcFetch::new(runtime, client, method, params))
}

#[doc(hidden)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use futures::FutureExt;
    use futures::future::BoxFuture;
    use serde_json::Value;

    use crate::rpc::client::RpcClient;
    use crate::rpc::errors::RpcError;

    /// Answers calls from a queue of canned responses and records each call.
    #[derive(Default)]
    pub struct ScriptedRpcClient {
        responses: Mutex<VecDeque<Result<Value, RpcError>>>,
        calls: Mutex<Vec<(String, Vec<Value>)>>,
    }

    impl ScriptedRpcClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&self, response: Result<Value, RpcError>) {
            self.responses.lock().unwrap().push_back(response);
        }

        pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl RpcClient for ScriptedRpcClient {
        fn call(
            &self,
            method: &str,
            params: Vec<Value>,
        ) -> BoxFuture<'static, Result<Value, RpcError>> {
            self.calls
                .lock()
                .unwrap()
                .push((method.to_string(), params));
            let response = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Value::Null));
            async move { response }.boxed()
        }
    }
}
