//! Runtime environment descriptors.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::config::EnvironmentConfig;

/// Metadata describing one runtime environment.
///
/// `id` is the key the environment is listed under and is not part of
/// the serialized form. `weight` is only serialized when set; an unset
/// weight sorts as 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentDescriptor {
    #[serde(skip)]
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    pub description: String,

    /// Configuration metadata the registry does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl EnvironmentDescriptor {
    /// Create a descriptor with no weight and no extra metadata.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            weight: None,
            description: description.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Set the display weight.
    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Weight used for ordering.
    pub fn sort_weight(&self) -> i64 {
        self.weight.unwrap_or(0)
    }

    /// Overlay user configuration onto these defaults.
    ///
    /// Each field the user sets replaces the default of the same name.
    /// Extra metadata is replaced per top-level key; nested values are
    /// taken as a whole rather than merged.
    pub fn apply_overrides(mut self, config: &EnvironmentConfig) -> Self {
        if let Some(description) = &config.description {
            self.description = description.clone();
        }
        if let Some(weight) = config.weight {
            self.weight = Some(weight);
        }
        self.extra
            .extend(config.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }
}
