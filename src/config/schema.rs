//! Configuration schema definitions for runenv.
//!
//! This module contains the struct definitions that map to
//! the YAML configuration file format.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Root configuration structure for `.runenv/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunenvConfig {
    /// Runtime environment definitions, keyed by environment id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub runtime_environments: BTreeMap<String, EnvironmentConfig>,

    /// How a switch is carried out.
    pub activation: ActivationConfig,
}

/// One entry of `runtime_environments`.
///
/// `description` and `weight` are typed so that a wrong value type is
/// reported at load time. Every other key lands in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Whether the environment may be offered at all.
    #[serde(default)]
    pub enabled: bool,

    /// Human-readable description override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display weight override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    /// Additional metadata passed through to the descriptor.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl EnvironmentConfig {
    /// Create an enabled entry with no overrides.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }
}

/// Settings for the activation task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    /// Shell command run to switch environments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config() {
        let config: RunenvConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.runtime_environments.is_empty());
        assert!(config.activation.command.is_none());
    }

    #[test]
    fn parses_environment_entries() {
        let yaml = r#"
runtime_environments:
  host:
    enabled: true
    weight: 5
    sites: [default]
  ddev:
    enabled: false
activation:
  command: bin/switch-rte
"#;
        let config: RunenvConfig = serde_yaml::from_str(yaml).unwrap();

        let host = &config.runtime_environments["host"];
        assert!(host.enabled);
        assert_eq!(host.weight, Some(5));
        assert!(host.description.is_none());
        assert!(host.extra.contains_key("sites"));
        assert!(!host.extra.contains_key("enabled"));

        assert!(!config.runtime_environments["ddev"].enabled);
        assert_eq!(config.activation.command.as_deref(), Some("bin/switch-rte"));
    }

    #[test]
    fn missing_enabled_means_disabled() {
        let yaml = "runtime_environments:\n  host:\n    description: Local\n";
        let config: RunenvConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.runtime_environments["host"].enabled);
    }

    #[test]
    fn rejects_non_integer_weight() {
        let yaml = "runtime_environments:\n  host:\n    enabled: true\n    weight: heavy\n";
        let result: std::result::Result<RunenvConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn empty_sections_are_omitted_when_serialized() {
        let yaml = serde_yaml::to_string(&RunenvConfig::default()).unwrap();
        assert!(!yaml.contains("runtime_environments"));
        assert!(!yaml.contains("command"));
    }
}
