//! Periodic node status displays.
//!
//! Each monitor pairs an [`RpcFetch`] with a [`Poller`]. Calling `render`
//! plays the role of a UI render: it re-polls with the current fetch pair
//! and formats whatever state is available right now.

use std::sync::Arc;

use serde_json::Value;
use tokio::runtime::Handle;

use crate::poll::{Cadence, PollError, Poller};
use crate::rpc::{EPOCH_METHOD, RpcClient, RpcFetch, RpcState, TRANSACTION_METHOD};

/// Text shown while a transaction lookup has no answer yet.
pub const FETCHING_PLACEHOLDER: &str = "fetching...";

/// Format an optional JSON result the way a JSON dump of it would read.
pub fn render_json(result: Option<&Value>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => "null".to_string(),
    }
}

/// Polls `dna_epoch` and renders the last known answer.
pub struct EpochMonitor {
    fetch: RpcFetch,
    poller: Poller,
    cadence: Cadence,
}

impl EpochMonitor {
    pub fn start(
        runtime: Handle,
        client: Arc<dyn RpcClient>,
        cadence: Cadence,
    ) -> Result<Self, PollError> {
        let fetch = RpcFetch::new(runtime.clone(), client, EPOCH_METHOD, Vec::new());
        let (poller, _) = Poller::activate_on(runtime, fetch.pair(), cadence)?;
        Ok(Self {
            fetch,
            poller,
            cadence,
        })
    }

    pub fn render(&mut self) -> Result<String, PollError> {
        let pair = self.poller.poll(self.fetch.pair(), self.cadence)?;
        Ok(render_json(pair.state.result.as_ref()))
    }

    /// Fetch now instead of waiting for the next tick.
    pub async fn refresh(&self) -> RpcState {
        self.fetch.refresh().await
    }

    pub fn state(&self) -> RpcState {
        self.fetch.state()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_armed()
    }
}

/// Looks up one transaction, polling until the node knows about it.
///
/// Once a non-null transaction arrives the cadence is disabled; without a
/// hash nothing is ever fetched.
pub struct SyncMonitor {
    fetch: Option<RpcFetch>,
    poller: Option<Poller>,
    cadence: Cadence,
}

impl SyncMonitor {
    pub fn start(
        runtime: Handle,
        client: Arc<dyn RpcClient>,
        hash: Option<&str>,
        cadence: Cadence,
    ) -> Result<Self, PollError> {
        let Some(hash) = hash else {
            return Ok(Self {
                fetch: None,
                poller: None,
                cadence: Cadence::Disabled,
            });
        };

        let fetch = RpcFetch::new(
            runtime.clone(),
            client,
            TRANSACTION_METHOD,
            vec![Value::String(hash.to_string())],
        );
        let (poller, _) = Poller::activate_on(runtime, fetch.pair(), cadence)?;
        Ok(Self {
            fetch: Some(fetch),
            poller: Some(poller),
            cadence,
        })
    }

    pub fn render(&mut self) -> Result<String, PollError> {
        let (Some(fetch), Some(poller)) = (&self.fetch, &mut self.poller) else {
            return Ok(FETCHING_PLACEHOLDER.to_string());
        };

        let found = transaction(&fetch.state()).is_some();
        let cadence = if found { Cadence::Disabled } else { self.cadence };
        let pair = poller.poll(fetch.pair(), cadence)?;

        Ok(match transaction(&pair.state) {
            Some(tx) => tx.to_string(),
            None => FETCHING_PLACEHOLDER.to_string(),
        })
    }

    pub async fn refresh(&self) -> Option<RpcState> {
        match &self.fetch {
            Some(fetch) => Some(fetch.refresh().await),
            None => None,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(Poller::is_armed)
    }
}

fn transaction(state: &RpcState) -> Option<&Value> {
    state.result.as_ref().filter(|value| !value.is_null())
}
