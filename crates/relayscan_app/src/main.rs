mod cli;
mod shutdown;
mod terminal;

use anyhow::Context;
use clap::Parser;
use relayscan_core::{HostState, ScanConfig};
use relayscan_engine::Controller;
use scan_logging::scan_info;

use crate::cli::Args;
use crate::terminal::LiveTerminal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = configure(Args::parse())?;
    println!("Configured hosts: {:?}", config.hosts().hosts());
    println!("Target data: {}", config.target());
    println!("Timeout: {}", humantime::format_duration(config.timeout()));
    println!();
    scan_info!(
        "scanning {} hosts for {:?} (timeout {:?})",
        config.hosts().len(),
        config.target(),
        config.timeout()
    );

    let report = Controller::new(config)
        .run(LiveTerminal::stdout(), shutdown::wait_for_signal())
        .await
        .context("rendering final status")?;

    // Per-host failures are reported in the block, not through the exit code.
    scan_info!(
        "run finished: {} found, {} not found, {} connection errors",
        report.count(HostState::Found),
        report.count(HostState::NotFound),
        report.count(HostState::ConnectionError)
    );
    Ok(())
}

/// Validates the arguments, then installs the file logger. The log file is
/// left untouched when validation fails.
fn configure(args: Args) -> anyhow::Result<ScanConfig> {
    let log_file = args.log_file.clone();
    let verbose = args.verbose;

    let config = args.into_config()?;
    scan_logging::initialize_file(&log_file, verbose)
        .with_context(|| format!("installing file logger at {}", log_file.display()))?;
    Ok(config)
}
