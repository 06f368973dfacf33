use std::time::Duration;

use crate::HostRegistry;

/// Deadline applied when the caller does not override it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("at least one host is required")]
    NoHosts,
    #[error("target must not be empty")]
    EmptyTarget,
}

/// Validated input for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    hosts: HostRegistry,
    target: String,
    timeout: Duration,
}

impl ScanConfig {
    /// Builds a config from raw host identifiers, deduplicating them.
    ///
    /// Fails if no host remains or the target is empty. `timeout` falls back
    /// to [`DEFAULT_TIMEOUT`].
    pub fn new<I, S>(
        hosts: I,
        target: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hosts: HostRegistry = hosts.into_iter().collect();
        if hosts.is_empty() {
            return Err(ConfigError::NoHosts);
        }
        let target = target.into();
        if target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        Ok(Self {
            hosts,
            target,
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    pub fn hosts(&self) -> &HostRegistry {
        &self.hosts
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
