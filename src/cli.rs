use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "walletview", version, about = "Fetch the wallets list and show it")]
pub struct Cli {
    /// Wallets endpoint URL (overrides config file)
    #[arg(long, value_name = "URL", env = "WALLETVIEW_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the result to stdout instead of starting the terminal UI
    #[arg(long)]
    pub once: bool,

    /// Where to write logs
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            timeout_seconds: self.timeout,
        }
    }
}
