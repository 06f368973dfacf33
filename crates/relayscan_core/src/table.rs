use std::sync::{Mutex, MutexGuard};

use crate::{HostRegistry, HostStatus, Outcome};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("no host at index {index} (table holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("host {url} already resolved")]
    AlreadyResolved { url: String },
}

/// Fixed-size, ordered status rows behind one table-wide lock.
///
/// Rows are created in registry order before any worker starts. Each row
/// leaves `Searching` at most once; later writes are rejected.
#[derive(Debug)]
pub struct StatusTable {
    rows: Mutex<Vec<HostStatus>>,
}

impl StatusTable {
    pub fn new(hosts: &HostRegistry) -> Self {
        let rows = hosts.hosts().iter().map(HostStatus::searching).collect();
        Self {
            rows: Mutex::new(rows),
        }
    }

    /// Records the terminal outcome for the host at `index`.
    pub fn set(&self, index: usize, outcome: Outcome) -> Result<(), StatusError> {
        let mut rows = self.lock();
        let len = rows.len();
        let row = rows
            .get_mut(index)
            .ok_or(StatusError::IndexOutOfRange { index, len })?;
        if row.state.is_terminal() {
            return Err(StatusError::AlreadyResolved {
                url: row.url.clone(),
            });
        }
        row.resolve(outcome);
        Ok(())
    }

    /// Copies every row out so callers can render without holding the lock.
    pub fn snapshot(&self) -> Vec<HostStatus> {
        self.lock().clone()
    }

    // Rows are only replaced whole, so a poisoned lock still guards
    // consistent data.
    fn lock(&self) -> MutexGuard<'_, Vec<HostStatus>> {
        self.rows
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HostState;

    fn table(hosts: &[&str]) -> StatusTable {
        StatusTable::new(&hosts.iter().copied().collect())
    }

    #[test]
    fn new_table_starts_searching_in_registry_order() {
        let table = table(&["ws://b", "ws://a"]);
        let rows = table.snapshot();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].url, "ws://b");
        assert_eq!(rows[1].url, "ws://a");
        assert!(rows.iter().all(|row| row.state == HostState::Searching));
    }

    #[test]
    fn set_rejects_out_of_range_index() {
        let table = table(&["ws://a"]);
        assert_eq!(
            table.set(3, Outcome::Found),
            Err(StatusError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let table = table(&["ws://a"]);
        let before = table.snapshot();
        table.set(0, Outcome::NotFound).unwrap();
        assert_eq!(before[0].state, HostState::Searching);
        assert_eq!(table.snapshot()[0].state, HostState::NotFound);
    }
}
