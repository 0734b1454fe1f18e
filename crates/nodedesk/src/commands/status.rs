use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use clap::ArgMatches;
use tokio::runtime::{Handle, Runtime};
use tracing::{error, info};

use nodedesk_core::config::DeskConfig;
use nodedesk_core::status::render_json;
use nodedesk_core::{
    Cadence, EpochMonitor, HttpRpcClient, NodeSettings, RpcClient, RpcState, SyncMonitor,
};

use super::helpers::load_config;

const REDRAW_INTERVAL: Duration = Duration::from_secs(1);

pub(crate) fn handle_status_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let hash = matches.get_one::<String>("hash").map(String::as_str);
    let watch_mode = matches.get_flag("watch");

    let config = load_config(matches)?;
    let node = NodeSettings::load(config.node.default_url());
    let client: Arc<dyn RpcClient> = Arc::new(HttpRpcClient::new(
        node.clone(),
        config.node.api_key.clone(),
        config.node.timeout(),
    )?);

    info!(
        event = "cli.status_started",
        node_url = node.url().as_str(),
        hash = ?hash,
        watch_mode = watch_mode
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    if watch_mode {
        run_status_watch_loop(&runtime, client, &node, &config, hash)
    } else {
        run_status_once(&runtime, client, &node, hash)
    }
}

fn run_status_once(
    runtime: &Runtime,
    client: Arc<dyn RpcClient>,
    node: &NodeSettings,
    hash: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (epoch, transaction) = runtime.block_on(async {
        let epoch = EpochMonitor::start(Handle::current(), client.clone(), Cadence::Disabled)?;
        let sync = SyncMonitor::start(Handle::current(), client, hash, Cadence::Disabled)?;
        let epoch_state = epoch.refresh().await;
        let transaction_state = sync.refresh().await;
        Ok::<_, Box<dyn std::error::Error>>((epoch_state, transaction_state))
    })?;

    if let Some(err) = &epoch.error {
        eprintln!("❌ Could not reach node at {}: {}", node.url(), err);
        error!(event = "cli.status_failed", error = err.as_str());
        return Err(err.clone().into());
    }

    println!("Node:        {}", node.url());
    println!("Epoch:       {}", render_json(epoch.result.as_ref()));
    if let Some(state) = transaction {
        if let Some(err) = &state.error {
            error!(event = "cli.status_transaction_failed", error = err.as_str());
        }
        println!("Transaction: {}", describe_transaction(&state));
    }

    info!(event = "cli.status_completed");
    Ok(())
}

/// One-shot transaction line: the transaction, the lookup error, or "not found".
fn describe_transaction(state: &RpcState) -> String {
    if let Some(tx) = state.result.as_ref().filter(|tx| !tx.is_null()) {
        return tx.to_string();
    }
    match &state.error {
        Some(err) => format!("lookup failed: {}", err),
        None => "not found".to_string(),
    }
}

fn run_status_watch_loop(
    runtime: &Runtime,
    client: Arc<dyn RpcClient>,
    node: &NodeSettings,
    config: &DeskConfig,
    hash: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    runtime.block_on(async {
        let mut epoch = EpochMonitor::start(
            Handle::current(),
            client.clone(),
            config.polling.epoch_cadence(),
        )?;
        let mut sync =
            SyncMonitor::start(Handle::current(), client, hash, config.polling.sync_cadence())?;

        // Tickers only fire after one full period; show something right away.
        epoch.refresh().await;
        sync.refresh().await;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);
        let mut redraw = tokio::time::interval(REDRAW_INTERVAL);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => break,
                _ = redraw.tick() => {
                    print!("\x1B[2J\x1B[1;1H");
                    println!("Node:        {}", node.url());
                    println!("Epoch:       {}", epoch.render()?);
                    if hash.is_some() {
                        println!("Transaction: {}", sync.render()?);
                    }
                    if let Some(err) = epoch.state().error {
                        println!("Last error:  {}", err);
                    }
                    println!(
                        "\nEpoch refresh {}, sync refresh {}. Press Ctrl+C to exit.",
                        config.polling.epoch_cadence(),
                        config.polling.sync_cadence()
                    );
                    io::stdout().flush()?;
                }
            }
        }

        info!(event = "cli.status_watch_stopped");
        Ok::<(), Box<dyn std::error::Error>>(())
    })
}
