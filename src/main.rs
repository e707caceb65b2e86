mod app;
mod components;
mod config;
mod data;
mod events;
mod theme;
mod utils;

use std::sync::Arc;

use alloy::primitives::Address;
use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tokio::sync::mpsc;

use crate::app::App;
use crate::config::Config;
use crate::data::ContractService;
use crate::data::addressbook::AddressBook;
use crate::data::provider::ChainClient;
use crate::data::wallet;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse();

    // The terminal is owned by the UI, so logs go to a file or nowhere.
    if let Some(ref path) = config.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    // Resolve RPC URL: use chain preset if not the default sepolia
    let rpc_url = if config.chain != "sepolia" {
        if let Some(chain_config) = data::chains::get_chain_config(&config.chain) {
            chain_config.rpc_url
        } else {
            eprintln!("Unknown chain '{}', using default RPC", config.chain);
            config.rpc_url.clone()
        }
    } else {
        config.rpc_url.clone()
    };

    let contract_address: Address = config
        .contract
        .parse()
        .map_err(|_| eyre!("Invalid contract address: {}", config.contract))?;

    let signer = wallet::load_signer(config.private_key.as_deref(), config.key_file.as_deref())?;
    if signer.is_none() {
        eprintln!("No signing key configured; running read-only.");
    }

    // Connect to the Ethereum node
    eprintln!("Connecting to {rpc_url}...");
    let client = ChainClient::connect(&rpc_url, signer).await?;
    let chain_id = client.chain_id();
    eprintln!("Connected to chain {chain_id}");

    // Create event channel
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    // Send initial connected event
    let _ = event_tx.send(events::AppEvent::Connected(chain_id));

    // Create contract service
    let service = Arc::new(ContractService::new(client, contract_address, event_tx));

    // Create app
    let mut app = App::with_service(service, AddressBook::load(), event_rx, config.tick_rate_ms);

    // Set chain info on header
    if let Some(chain_config) = data::chains::get_chain_config(&config.chain) {
        app.set_chain_info(chain_config.name);
    }

    // Initialize terminal
    let terminal = ratatui::init();
    let result = app.run(terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
