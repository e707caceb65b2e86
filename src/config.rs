use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "team-tui", about = "Terminal dashboard for the TeamManagement contract")]
pub struct Config {
    /// RPC endpoint URL
    #[arg(
        short,
        long,
        default_value = "https://ethereum-sepolia-rpc.publicnode.com"
    )]
    pub rpc_url: String,

    /// TeamManagement contract address
    #[arg(
        long,
        env = "TEAM_TUI_CONTRACT",
        default_value = "0x8CFeBC7dF90808DFed7258CDD244B1fF56f33eF7"
    )]
    pub contract: String,

    /// Hex private key of the signing account
    #[arg(long, env = "TEAM_TUI_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Path to a file containing the hex private key
    #[arg(long)]
    pub key_file: Option<PathBuf>,

    /// Chain preset (sepolia, ethereum, holesky)
    #[arg(long, default_value = "sepolia")]
    pub chain: String,

    /// Tick rate in milliseconds for UI refresh
    #[arg(long, default_value = "100")]
    pub tick_rate_ms: u64,

    /// Append logs to this file; the terminal itself is taken by the UI
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
