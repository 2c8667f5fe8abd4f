//! The runtime environment registry.
//!
//! The registry is rebuilt from configuration on every invocation. An id
//! present in it means the environment can be selected; an id is absent
//! when it is disabled, when no kind is registered for it, or when its
//! availability check fails.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::path::Path;

use super::descriptor::EnvironmentDescriptor;
use super::kind::{EnvironmentKind, HostKind, MarkerFileKind};
use crate::config::EnvironmentConfig;

/// Collects the environment kinds a registry is built from.
pub struct RegistryBuilder {
    kinds: Vec<Box<dyn EnvironmentKind>>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::with_builtin_kinds()
    }
}

impl RegistryBuilder {
    /// A builder without any kinds.
    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// A builder with the `host` and `ddev` kinds.
    pub fn with_builtin_kinds() -> Self {
        Self::empty()
            .register(HostKind)
            .register(MarkerFileKind::ddev())
    }

    /// Register a kind, replacing any kind with the same id.
    pub fn register(mut self, kind: impl EnvironmentKind + 'static) -> Self {
        self.kinds.retain(|existing| existing.id() != kind.id());
        self.kinds.push(Box::new(kind));
        self
    }

    /// Ids of the registered kinds, in registration order.
    pub fn kind_ids(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(|kind| kind.id())
    }

    /// Build the registry for a project.
    pub fn build(
        &self,
        config: &BTreeMap<String, EnvironmentConfig>,
        project_root: &Path,
    ) -> Registry {
        for id in config.keys() {
            if !self.kinds.iter().any(|kind| kind.id() == id) {
                tracing::debug!("Ignoring runtime environment '{}': no such kind", id);
            }
        }

        let environments = self
            .kinds
            .iter()
            .filter(|kind| {
                config
                    .get(kind.id())
                    .is_some_and(|entry| entry.enabled)
            })
            .filter(|kind| kind.is_available(project_root))
            .map(|kind| {
                let descriptor = kind.descriptor(&config[kind.id()]);
                (kind.id().to_string(), descriptor)
            })
            .collect();

        Registry { environments }
    }
}

/// Available runtime environments, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    environments: BTreeMap<String, EnvironmentDescriptor>,
}

impl Registry {
    /// Build the registry with the built-in kinds.
    ///
    /// # Example
    ///
    /// ```
    /// use runenv::config::EnvironmentConfig;
    /// use runenv::environment::Registry;
    /// use std::collections::BTreeMap;
    ///
    /// let mut config = BTreeMap::new();
    /// config.insert("host".to_string(), EnvironmentConfig::enabled());
    /// config.insert("ddev".to_string(), EnvironmentConfig::enabled());
    ///
    /// let temp = tempfile::TempDir::new().unwrap();
    /// let registry = Registry::build(&config, temp.path());
    ///
    /// // No .ddev/config.yaml in the project, so only host is available.
    /// assert!(registry.contains("host"));
    /// assert!(!registry.contains("ddev"));
    /// ```
    pub fn build(config: &BTreeMap<String, EnvironmentConfig>, project_root: &Path) -> Self {
        RegistryBuilder::with_builtin_kinds().build(config, project_root)
    }

    /// Create a registry from descriptors directly.
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = EnvironmentDescriptor>) -> Self {
        Self {
            environments: descriptors
                .into_iter()
                .map(|descriptor| (descriptor.id.clone(), descriptor))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&EnvironmentDescriptor> {
        self.environments.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.environments.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// All descriptors, ordered by weight and then by id.
    pub fn list(&self) -> Vec<&EnvironmentDescriptor> {
        let mut list: Vec<_> = self.environments.values().collect();
        list.sort_by(|a, b| {
            a.sort_weight()
                .cmp(&b.sort_weight())
                .then_with(|| a.id.cmp(&b.id))
        });
        list
    }

    /// The listing in presentation order, serializable as an id-keyed map.
    pub fn listing(&self) -> Listing<'_> {
        Listing(self.list())
    }
}

/// Descriptors serialized as a map from id to descriptor, in list order.
#[derive(Debug)]
pub struct Listing<'a>(Vec<&'a EnvironmentDescriptor>);

impl Serialize for Listing<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for descriptor in &self.0 {
            map.serialize_entry(&descriptor.id, descriptor)?;
        }
        map.end()
    }
}
