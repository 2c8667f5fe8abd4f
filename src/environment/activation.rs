//! Handing a selected environment to the activation task.
//!
//! Switching does no activation work itself. It looks up the descriptor
//! and passes it to an [`Activator`], whose outcome is returned as is.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::descriptor::EnvironmentDescriptor;
use super::registry::Registry;
use crate::error::{Result, RunenvError};
use crate::shell::{self, CommandOptions};

/// Outcome of an activation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationOutcome {
    pub success: bool,
    /// Exit code reported by the task, if it has one.
    pub exit_code: Option<i32>,
}

impl ActivationOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: Some(0),
        }
    }

    pub fn failure(exit_code: Option<i32>) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Performs the actual switch to a runtime environment.
pub trait Activator {
    fn activate(&self, descriptor: &EnvironmentDescriptor) -> Result<ActivationOutcome>;
}

/// Switch to `id`, delegating to `activator`.
///
/// `id` must already have passed [`validate`](super::validate); an id that
/// is not in the registry never reaches the activator.
pub fn switch(id: &str, registry: &Registry, activator: &dyn Activator) -> Result<ActivationOutcome> {
    let descriptor = registry
        .get(id)
        .ok_or_else(|| RunenvError::UnknownEnvironment {
            value: id.to_string(),
            locator: "runtime environment id".to_string(),
        })?;

    tracing::info!("Switching runtime environment to '{}'", id);
    activator.activate(descriptor)
}

/// Runs a configured shell command as the activation task.
///
/// The descriptor is exposed to the command through environment variables:
///
/// - `RUNENV_ID`
/// - `RUNENV_DESCRIPTION`
/// - `RUNENV_WEIGHT` (set only when the descriptor has a weight)
/// - `RUNENV_DESCRIPTOR`, the whole descriptor as JSON
#[derive(Debug, Clone)]
pub struct ShellActivator {
    command: Option<String>,
    project_root: PathBuf,
}

impl ShellActivator {
    pub fn new(command: Option<String>, project_root: &Path) -> Self {
        Self {
            command,
            project_root: project_root.to_path_buf(),
        }
    }

    /// Environment variables describing `descriptor`.
    pub fn environment(descriptor: &EnvironmentDescriptor) -> Result<BTreeMap<String, String>> {
        let mut env = BTreeMap::new();
        env.insert("RUNENV_ID".to_string(), descriptor.id.clone());
        env.insert(
            "RUNENV_DESCRIPTION".to_string(),
            descriptor.description.clone(),
        );
        if let Some(weight) = descriptor.weight {
            env.insert("RUNENV_WEIGHT".to_string(), weight.to_string());
        }

        let mut json = serde_json::to_value(descriptor).map_err(anyhow::Error::from)?;
        if let Some(object) = json.as_object_mut() {
            object.insert("id".to_string(), descriptor.id.clone().into());
        }
        env.insert("RUNENV_DESCRIPTOR".to_string(), json.to_string());
        Ok(env)
    }
}

impl Activator for ShellActivator {
    fn activate(&self, descriptor: &EnvironmentDescriptor) -> Result<ActivationOutcome> {
        let command = self
            .command
            .as_deref()
            .ok_or_else(|| RunenvError::ActivationNotConfigured {
                id: descriptor.id.clone(),
            })?;

        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            env: Self::environment(descriptor)?,
            capture: false,
        };
        let result = shell::execute(command, &options)?;

        if result.success {
            Ok(ActivationOutcome::success())
        } else {
            tracing::debug!(
                "Activation command exited with {:?} after {:?}",
                result.exit_code,
                result.duration
            );
            Ok(ActivationOutcome::failure(result.exit_code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every descriptor it is asked to activate.
    struct RecordingActivator {
        outcome: ActivationOutcome,
        calls: RefCell<Vec<EnvironmentDescriptor>>,
    }

    impl RecordingActivator {
        fn new(outcome: ActivationOutcome) -> Self {
            Self {
                outcome,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Activator for RecordingActivator {
        fn activate(&self, descriptor: &EnvironmentDescriptor) -> Result<ActivationOutcome> {
            self.calls.borrow_mut().push(descriptor.clone());
            Ok(self.outcome)
        }
    }

    fn registry() -> Registry {
        Registry::from_descriptors([
            EnvironmentDescriptor::new("host", "Host").with_weight(-99),
            EnvironmentDescriptor::new("ddev", "DDev"),
        ])
    }

    #[test]
    fn switch_delegates_exact_descriptor() {
        let registry = registry();
        let activator = RecordingActivator::new(ActivationOutcome::success());

        let outcome = switch("host", &registry, &activator).unwrap();

        assert_eq!(outcome, ActivationOutcome::success());
        let calls = activator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(&calls[0], registry.get("host").unwrap());
    }

    #[test]
    fn switch_passes_failure_through() {
        let activator = RecordingActivator::new(ActivationOutcome::failure(Some(4)));

        let outcome = switch("ddev", &registry(), &activator).unwrap();

        assert_eq!(outcome, ActivationOutcome::failure(Some(4)));
    }

    #[test]
    fn switch_never_activates_unknown_id() {
        let activator = RecordingActivator::new(ActivationOutcome::success());

        let err = switch("staging", &registry(), &activator).unwrap_err();

        assert!(matches!(err, RunenvError::UnknownEnvironment { .. }));
        assert!(activator.calls.borrow().is_empty());
    }

    #[test]
    fn environment_exposes_descriptor() {
        let mut descriptor = EnvironmentDescriptor::new("host", "Host").with_weight(-99);
        descriptor
            .extra
            .insert("sites".to_string(), serde_yaml::from_str("[default]").unwrap());

        let env = ShellActivator::environment(&descriptor).unwrap();

        assert_eq!(env["RUNENV_ID"], "host");
        assert_eq!(env["RUNENV_WEIGHT"], "-99");
        let json: serde_json::Value = serde_json::from_str(&env["RUNENV_DESCRIPTOR"]).unwrap();
        assert_eq!(json["id"], "host");
        assert_eq!(json["sites"][0], "default");
    }

    #[test]
    fn environment_omits_unset_weight() {
        let env = ShellActivator::environment(&EnvironmentDescriptor::new("ddev", "DDev")).unwrap();
        assert!(!env.contains_key("RUNENV_WEIGHT"));
    }

    #[test]
    fn shell_activator_requires_command() {
        let temp = tempfile::TempDir::new().unwrap();
        let activator = ShellActivator::new(None, temp.path());

        let err = activator
            .activate(&EnvironmentDescriptor::new("host", "Host"))
            .unwrap_err();
        assert!(matches!(err, RunenvError::ActivationNotConfigured { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn shell_activator_reports_exit_code() {
        let temp = tempfile::TempDir::new().unwrap();
        let activator = ShellActivator::new(
            Some("test \"$RUNENV_ID\" = ddev && exit 0 || exit 5".to_string()),
            temp.path(),
        );

        let ok = activator
            .activate(&EnvironmentDescriptor::new("ddev", "DDev"))
            .unwrap();
        assert!(ok.success);

        let failed = activator
            .activate(&EnvironmentDescriptor::new("host", "Host"))
            .unwrap();
        assert_eq!(failed, ActivationOutcome::failure(Some(5)));
    }
}
