use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use relayscan_core::{ConfigError, ScanConfig};

/// Watch relay firehoses for a target string.
#[derive(Debug, Parser)]
#[command(name = "relayscan", version)]
pub struct Args {
    /// The WebSocket URL (including protocol) to connect to (repeatable).
    #[arg(long = "hosts", value_name = "URL")]
    pub hosts: Vec<String>,

    /// The target data to search for in received messages.
    #[arg(long, default_value = "")]
    pub target: String,

    /// How long to keep connections open before closing them automatically.
    #[arg(long, value_parser = humantime::parse_duration, default_value = "1h")]
    pub timeout: Duration,

    /// Where to write the log.
    #[arg(long, default_value = "relayscan.log")]
    pub log_file: PathBuf,

    /// Log at debug level.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Args {
    pub fn into_config(self) -> Result<ScanConfig, ConfigError> {
        ScanConfig::new(self.hosts, self.target, Some(self.timeout))
    }
}
