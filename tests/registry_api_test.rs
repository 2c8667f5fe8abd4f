//! Public API tests for building and using the runtime environment registry.

use runenv::config::{load_project_config, EnvironmentConfig};
use runenv::environment::{
    switch, validate, ActivationOutcome, Activator, CommandInput, EnvironmentDescriptor,
    EnvironmentKind, Locator, Registry, RegistryBuilder,
};
use runenv::{Result, RunenvError};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".runenv");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

fn registry_for(temp: &TempDir) -> Registry {
    let config = load_project_config(temp.path()).unwrap();
    Registry::build(&config.runtime_environments, temp.path())
}

/// A kind available only in projects with a `.remote` directory.
struct RemoteKind;

impl EnvironmentKind for RemoteKind {
    fn id(&self) -> &str {
        "remote"
    }

    fn is_available(&self, project_root: &Path) -> bool {
        project_root.join(".remote").is_dir()
    }

    fn descriptor(&self, config: &EnvironmentConfig) -> EnvironmentDescriptor {
        EnvironmentDescriptor::new("remote", "Remote workspace")
            .with_weight(10)
            .apply_overrides(config)
    }
}

struct Recorder(RefCell<Vec<String>>);

impl Activator for Recorder {
    fn activate(&self, descriptor: &EnvironmentDescriptor) -> Result<ActivationOutcome> {
        self.0.borrow_mut().push(descriptor.id.clone());
        Ok(ActivationOutcome::success())
    }
}

#[test]
fn host_and_ddev_end_to_end() {
    let temp = project("runtime_environments:\n  host: {enabled: true}\n  ddev: {enabled: true}\n");
    assert_eq!(registry_for(&temp).len(), 1);

    fs::create_dir_all(temp.path().join(".ddev")).unwrap();
    fs::write(temp.path().join(".ddev/config.yaml"), "").unwrap();

    let registry = registry_for(&temp);
    let ids: Vec<_> = registry.list().iter().map(|d| d.id.clone()).collect();
    assert_eq!(ids, ["host", "ddev"]);
}

#[test]
fn custom_kind_is_registered_through_builder() {
    let temp = project("runtime_environments:\n  remote: {enabled: true, region: eu}\n");
    let config = load_project_config(temp.path()).unwrap();
    let builder = RegistryBuilder::with_builtin_kinds().register(RemoteKind);

    assert!(builder
        .build(&config.runtime_environments, temp.path())
        .is_empty());

    fs::create_dir_all(temp.path().join(".remote")).unwrap();
    let registry = builder.build(&config.runtime_environments, temp.path());

    let remote = registry.get("remote").unwrap();
    assert_eq!(remote.weight, Some(10));
    assert_eq!(remote.extra["region"], "eu");
}

#[test]
fn validate_then_switch() {
    let temp = project("runtime_environments:\n  host: {enabled: true}\n");
    let registry = registry_for(&temp);
    let recorder = Recorder(RefCell::new(Vec::new()));
    let locators = Locator::parse_list("argument.rte_id").unwrap();

    let good = CommandInput::new().with_argument("rte_id", Some("host"));
    validate(&locators, &good, &registry).unwrap();
    switch("host", &registry, &recorder).unwrap();

    let bad = CommandInput::new().with_argument("rte_id", Some("staging"));
    let err = validate(&locators, &bad, &registry).unwrap_err();
    assert!(matches!(err, RunenvError::UnknownEnvironment { .. }));

    assert_eq!(recorder.0.borrow().as_slice(), ["host"]);
}
