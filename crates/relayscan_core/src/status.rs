use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostState {
    Searching,
    Found,
    NotFound,
    ConnectionError,
}

impl HostState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, HostState::Searching)
    }
}

/// How a worker finished with its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A received message contained the target.
    Found,
    /// The run was cancelled or timed out before a match.
    NotFound,
    /// Dial or read failure not caused by cancellation.
    ConnectionError(String),
}

impl Outcome {
    pub fn state(&self) -> HostState {
        match self {
            Outcome::Found => HostState::Found,
            Outcome::NotFound => HostState::NotFound,
            Outcome::ConnectionError(_) => HostState::ConnectionError,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found => write!(f, "found"),
            Outcome::NotFound => write!(f, "not found"),
            Outcome::ConnectionError(cause) => write!(f, "connection error: {cause}"),
        }
    }
}

/// One row of the status table.
///
/// `error` is only ever set together with [`HostState::ConnectionError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostStatus {
    pub url: String,
    pub state: HostState,
    pub error: Option<String>,
}

impl HostStatus {
    pub fn searching(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: HostState::Searching,
            error: None,
        }
    }

    pub(crate) fn resolve(&mut self, outcome: Outcome) {
        self.state = outcome.state();
        self.error = match outcome {
            Outcome::ConnectionError(cause) => Some(cause),
            Outcome::Found | Outcome::NotFound => None,
        };
    }
}
