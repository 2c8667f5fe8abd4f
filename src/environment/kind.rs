//! Kinds of runtime environment the registry knows how to build.
//!
//! A kind owns one environment id. It decides whether the environment is
//! available in a project and which descriptor it produces from the
//! configuration entry of that id. Third parties add environments by
//! implementing [`EnvironmentKind`] and registering it with a
//! [`RegistryBuilder`](super::RegistryBuilder).

use std::path::{Path, PathBuf};

use super::descriptor::EnvironmentDescriptor;
use crate::config::EnvironmentConfig;

/// Builds the descriptor for one environment id.
pub trait EnvironmentKind {
    /// The environment id this kind is configured under.
    fn id(&self) -> &str;

    /// Whether the environment can be used in the project at `project_root`.
    ///
    /// Only asked for environments that are enabled in configuration.
    fn is_available(&self, _project_root: &Path) -> bool {
        true
    }

    /// Produce the descriptor for an enabled, available environment.
    fn descriptor(&self, config: &EnvironmentConfig) -> EnvironmentDescriptor;
}

/// The host machine, without any virtualization.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostKind;

impl HostKind {
    pub const ID: &'static str = "host";
    pub const DEFAULT_WEIGHT: i64 = -99;
    pub const DEFAULT_DESCRIPTION: &'static str =
        "Uses the host machine without any virtualization";
}

impl EnvironmentKind for HostKind {
    fn id(&self) -> &str {
        Self::ID
    }

    fn descriptor(&self, config: &EnvironmentConfig) -> EnvironmentDescriptor {
        EnvironmentDescriptor::new(Self::ID, Self::DEFAULT_DESCRIPTION)
            .with_weight(Self::DEFAULT_WEIGHT)
            .apply_overrides(config)
    }
}

/// An environment that is available once a marker file exists in the project.
#[derive(Debug, Clone)]
pub struct MarkerFileKind {
    id: String,
    marker: PathBuf,
    description: String,
    overlay_config: bool,
}

impl MarkerFileKind {
    /// Create a kind gated on `marker`, relative to the project root.
    ///
    /// The descriptor is the static default; see [`Self::with_config_overlay`].
    pub fn new(
        id: impl Into<String>,
        marker: impl Into<PathBuf>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            marker: marker.into(),
            description: description.into(),
            overlay_config: false,
        }
    }

    /// The DDev containerized environment.
    pub fn ddev() -> Self {
        Self::new(
            "ddev",
            Path::new(".ddev").join("config.yaml"),
            "Runtime environment provided by DDev",
        )
    }

    /// Overlay configuration fields onto the default descriptor.
    pub fn with_config_overlay(mut self) -> Self {
        self.overlay_config = true;
        self
    }
}

impl EnvironmentKind for MarkerFileKind {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_available(&self, project_root: &Path) -> bool {
        let path = project_root.join(&self.marker);
        let exists = path.exists();
        if !exists {
            tracing::debug!(
                "Runtime environment '{}' unavailable: {} not found",
                self.id,
                path.display()
            );
        }
        exists
    }

    fn descriptor(&self, config: &EnvironmentConfig) -> EnvironmentDescriptor {
        let defaults = EnvironmentDescriptor::new(self.id.clone(), self.description.clone());
        if self.overlay_config {
            defaults.apply_overrides(config)
        } else {
            defaults
        }
    }
}
