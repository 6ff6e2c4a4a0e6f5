//! Host registry
//!
//! Ordered collection of hosts with name and tag lookup.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use super::error::HostError;
use super::render;
use super::schema::Host;

/// Ordered collection of hosts
///
/// Insertion order is preserved and is the order hosts are listed and
/// rendered in. Duplicate names are allowed; lookups return the first.
#[derive(Debug, Clone, Default)]
pub struct HostRegistry {
    hosts: Vec<Host>,
}

impl HostRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a host
    pub fn register(&mut self, host: Host) {
        self.hosts.push(host);
    }

    /// All hosts in registration order
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Host> {
        self.hosts.iter()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Get the first host with exactly this name
    pub fn get_host(&self, name: &str) -> Option<&Host> {
        self.hosts.iter().find(|host| host.name == name)
    }

    /// Select hosts by name or tag
    ///
    /// A host is returned if any selector equals its name or any of its
    /// tags. Each host appears at most once, in registration order.
    /// Selectors that match nothing are ignored.
    pub fn hosts_by_names<S: AsRef<str>>(&self, selectors: &[S]) -> Vec<&Host> {
        self.hosts
            .iter()
            .filter(|host| {
                selectors.iter().any(|s| host.name == s.as_ref())
                    || host
                        .tags
                        .iter()
                        .any(|tag| selectors.iter().any(|s| tag == s.as_ref()))
            })
            .collect()
    }

    /// All tags in use, deduplicated and sorted
    pub fn tags(&self) -> Vec<&str> {
        self.hosts
            .iter()
            .flat_map(|host| host.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Render the whole registry as an SSH config document
    pub fn gen_hosts_config(&self) -> Result<Vec<u8>, HostError> {
        let mut buf = Vec::new();
        render::write_hosts_config(self, &mut buf)?;
        Ok(buf)
    }

    /// Render the whole registry as a string
    pub fn render_hosts_config(&self) -> String {
        render::render_hosts_config(self)
    }

    /// Remove every host
    pub fn reset(&mut self) {
        self.hosts.clear();
    }
}

impl Extend<Host> for HostRegistry {
    fn extend<T: IntoIterator<Item = Host>>(&mut self, iter: T) {
        self.hosts.extend(iter);
    }
}

impl FromIterator<Host> for HostRegistry {
    fn from_iter<T: IntoIterator<Item = Host>>(iter: T) -> Self {
        Self {
            hosts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HostRegistry {
    type Item = &'a Host;
    type IntoIter = std::slice::Iter<'a, Host>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}

/// A registry shared between threads
///
/// Readers take a snapshot and keep using it while a reload swaps in a
/// fully built replacement. A reader never observes a half-loaded registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Arc<HostRegistry>>>,
}

impl SharedRegistry {
    pub fn new(registry: HostRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// Current registry
    pub fn snapshot(&self) -> Arc<HostRegistry> {
        // The lock only ever guards a complete Arc, so a poisoned lock is still usable
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a new registry, returning the previous one
    pub fn replace(&self, registry: HostRegistry) -> Arc<HostRegistry> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        tracing::debug!(
            "Replacing host registry ({} -> {} hosts)",
            guard.len(),
            registry.len()
        );
        std::mem::replace(&mut *guard, Arc::new(registry))
    }

    /// Swap in an empty registry
    pub fn reset(&self) {
        self.replace(HostRegistry::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(hosts: &[&Host]) -> Vec<String> {
        hosts.iter().map(|h| h.name.clone()).collect()
    }

    #[test]
    fn test_get_host_exact_match() {
        let registry: HostRegistry = vec![
            Host::new("web1").with_tag("web"),
            Host::new("db1").with_tag("db"),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.get_host("web1").map(|h| h.name.as_str()), Some("web1"));
        assert!(registry.get_host("web").is_none());
        assert!(registry.get_host("WEB1").is_none());
    }

    #[test]
    fn test_get_host_first_duplicate_wins() {
        let mut registry = HostRegistry::new();
        registry.register(Host::new("dup").with_description("first"));
        registry.register(Host::new("dup").with_description("second"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_host("dup").unwrap().description, "first");
    }

    #[test]
    fn test_hosts_by_names_union_without_duplicates() {
        let registry: HostRegistry = vec![
            Host::new("a").with_tag("grp"),
            Host::new("b").with_tag("grp"),
            Host::new("c").with_tag("other"),
        ]
        .into_iter()
        .collect();

        let selected = registry.hosts_by_names(&["a", "grp"]);
        assert_eq!(names(&selected), vec!["a", "b"]);
    }

    #[test]
    fn test_hosts_by_names_keeps_registry_order() {
        let registry: HostRegistry = vec![
            Host::new("a"),
            Host::new("b").with_tag("x").with_tag("y"),
            Host::new("c").with_tag("y"),
        ]
        .into_iter()
        .collect();

        let selected = registry.hosts_by_names(&["c", "y", "a", "x"]);
        assert_eq!(names(&selected), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_hosts_by_names_ignores_unknown_selectors() {
        let registry: HostRegistry = vec![Host::new("a").with_tag("grp")].into_iter().collect();

        assert!(registry.hosts_by_names(&["missing"]).is_empty());
        assert!(registry.hosts_by_names::<&str>(&[]).is_empty());
        assert_eq!(names(&registry.hosts_by_names(&["missing", "a"])), vec!["a"]);
        assert!(HostRegistry::new().hosts_by_names(&["a"]).is_empty());
    }

    #[test]
    fn test_hosts_by_names_accepts_owned_strings() {
        let registry: HostRegistry = vec![Host::new("a")].into_iter().collect();
        let selectors = vec!["a".to_string()];
        assert_eq!(registry.hosts_by_names(&selectors).len(), 1);
    }

    #[test]
    fn test_tags_dedup_and_sorted() {
        let registry: HostRegistry = vec![
            Host::new("h1").with_tag("web").with_tag("db"),
            Host::new("h2").with_tag("web").with_tag("cache"),
            Host::new("h3"),
        ]
        .into_iter()
        .collect();

        assert_eq!(registry.tags(), vec!["cache", "db", "web"]);
        assert!(HostRegistry::new().tags().is_empty());
    }

    #[test]
    fn test_reset_clears_hosts() {
        let mut registry: HostRegistry = vec![Host::new("a"), Host::new("b")].into_iter().collect();
        assert!(!registry.is_empty());

        registry.reset();
        assert!(registry.is_empty());
        assert!(registry.get_host("a").is_none());
    }

    #[test]
    fn test_extend_appends_in_order() {
        let mut registry = HostRegistry::new();
        registry.register(Host::new("a"));
        registry.extend(vec![Host::new("b"), Host::new("c")]);

        let order: Vec<&str> = registry.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_shared_registry_snapshot_survives_replace() {
        let shared = SharedRegistry::new(vec![Host::new("old")].into_iter().collect());
        let before = shared.snapshot();

        let previous = shared.replace(vec![Host::new("new1"), Host::new("new2")].into_iter().collect());

        assert_eq!(previous.hosts()[0].name, "old");
        assert_eq!(before.len(), 1);
        assert_eq!(before.hosts()[0].name, "old");
        assert_eq!(shared.snapshot().len(), 2);

        shared.reset();
        assert!(shared.snapshot().is_empty());
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let shared = SharedRegistry::new(HostRegistry::new());
        let writer = shared.clone();

        std::thread::spawn(move || {
            writer.replace(vec![Host::new("a").with_tag("t")].into_iter().collect());
        })
        .join()
        .unwrap();

        assert_eq!(shared.snapshot().tags(), vec!["t"]);
    }
}
