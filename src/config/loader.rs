//! Configuration file discovery and loading.
//!
//! This module finds the configuration files of a project, merges them
//! in priority order and deserializes the result.

use crate::config::merger::merge_layers;
use crate::config::schema::RunenvConfig;
use crate::error::{Result, RunenvError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding runenv configuration inside a project.
pub const CONFIG_DIR: &str = ".runenv";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. Project config (`.runenv/config.yml`, or the `--config` path)
/// 2. Local overrides (`.runenv/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Project config.
    pub project: Option<PathBuf>,

    /// Local overrides.
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(CONFIG_DIR);
        Self {
            project: existing(dir.join("config.yml")),
            project_local: existing(dir.join("config.local.yml")),
        }
    }

    /// Discover config files, replacing the project config with `explicit`.
    pub fn with_explicit(project_root: &Path, explicit: &Path) -> Self {
        Self {
            project: Some(explicit.to_path_buf()),
            ..Self::discover(project_root)
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// Looks for a `.runenv` directory first, then falls back to `.git`.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_DIR).is_dir())
        .or_else(|| start.ancestors().find(|dir| dir.join(".git").exists()))
        .map(Path::to_path_buf)
}

/// Load a config file as a raw YAML value.
///
/// An explicitly named file that does not exist is an IO error.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| RunenvError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge the config files described by `paths`.
///
/// When no file exists the default (empty) configuration is returned:
/// a project without configuration simply has no runtime environments.
pub fn load_config(paths: &ConfigPaths) -> Result<RunenvConfig> {
    let files = paths.all_existing();
    if files.is_empty() {
        tracing::debug!("No runtime environment configuration found");
        return Ok(RunenvConfig::default());
    }

    let layers = files
        .iter()
        .map(|path| {
            tracing::debug!("Loading config layer {}", path.display());
            load_config_value(path)
        })
        .collect::<Result<Vec<_>>>()?;

    let merged = merge_layers(layers);
    serde_yaml::from_value(merged).map_err(|e| RunenvError::ConfigParseError {
        // Report against the highest-priority layer that took part.
        path: files.last().map(|p| p.to_path_buf()).unwrap_or_default(),
        message: e.to_string(),
    })
}

/// Discover and load the configuration of a project.
pub fn load_project_config(project_root: &Path) -> Result<RunenvConfig> {
    load_config(&ConfigPaths::discover(project_root))
}
