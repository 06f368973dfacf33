use crate::{HostState, HostStatus};

fn label(state: HostState) -> &'static str {
    match state {
        HostState::Searching => "SEARCHING:",
        HostState::Found => "FOUND:",
        HostState::NotFound => "NOT_FOUND:",
        HostState::ConnectionError => "CONN_ERR:",
    }
}

/// Renders one row as `LABEL: url`, with ` (cause)` appended for connection
/// errors. Line breaks in the cause are flattened so each row stays on one
/// line.
pub fn render_line(status: &HostStatus) -> String {
    let mut line = format!("{} {}", label(status.state), status.url);
    if let Some(cause) = &status.error {
        line.push_str(" (");
        line.push_str(&cause.replace(['\r', '\n'], " "));
        line.push(')');
    }
    line
}

pub fn render_lines(statuses: &[HostStatus]) -> Vec<String> {
    statuses.iter().map(render_line).collect()
}
