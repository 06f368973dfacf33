#![deny(missing_docs)]
//! Shared logging utilities for the relayscan workspace.
//!
//! This crate provides the `scan_*` logging macros used by the engine and the
//! binary, the file logger installed by the binary, and a minimal test
//! initializer for the global logger.
//!
//! The live status block owns the terminal while a run is in progress, so the
//! binary never logs to stdout; everything goes through [`initialize_file`].

use std::fs::File;
use std::path::Path;

use log::{LevelFilter, SetLoggerError};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, TermLogger, TerminalMode, WriteLogger,
};

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! scan_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! scan_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! scan_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! scan_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! scan_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Failure to install the file logger.
#[derive(Debug, thiserror::Error)]
pub enum LogInitError {
    /// The log file could not be created.
    #[error("cannot create log file: {0}")]
    Io(#[from] std::io::Error),
    /// Another global logger was installed first.
    #[error("a logger is already installed: {0}")]
    AlreadySet(#[from] SetLoggerError),
}

/// Installs a file logger writing to `path`, truncating any previous log.
///
/// Fails if the file cannot be created or a global logger is already set;
/// in the latter case the earlier logger stays active.
pub fn initialize_file(path: &Path, verbose: bool) -> Result<(), LogInitError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = File::create(path)?;
    CombinedLogger::init(vec![WriteLogger::new(level, build_config(), file)])?;
    Ok(())
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
