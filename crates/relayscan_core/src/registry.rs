/// Ordered set of host identifiers.
///
/// Exact duplicates are ignored and first-seen order is kept. No
/// normalization is applied: `wss://a` and `wss://a/` are distinct hosts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostRegistry {
    hosts: Vec<String>,
}

impl HostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a host, returning `false` if it was already registered.
    pub fn insert(&mut self, host: impl Into<String>) -> bool {
        let host = host.into();
        if self.hosts.contains(&host) {
            return false;
        }
        self.hosts.push(host);
        true
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for HostRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = HostRegistry::new();
        for host in iter {
            registry.insert(host);
        }
        registry
    }
}
