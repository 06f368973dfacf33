//! Relayscan core: host registry, run configuration, status table and the
//! line rendering of a status snapshot.
mod config;
mod registry;
mod status;
mod table;
mod view_model;

pub use config::{ConfigError, ScanConfig, DEFAULT_TIMEOUT};
pub use registry::HostRegistry;
pub use status::{HostState, HostStatus, Outcome};
pub use table::{StatusError, StatusTable};
pub use view_model::{render_line, render_lines};
