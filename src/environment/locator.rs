//! Input locators and the environment id validation gate.
//!
//! A command declares where runtime environment ids can appear in its
//! input with locators of the form `option.<name>` or `argument.<name>`.
//! Before the command runs, every located value is checked against the
//! registry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::registry::Registry;
use crate::error::{Result, RunenvError};

/// Where in the command input a value lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LocatorKind {
    Option,
    Argument,
}

impl LocatorKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Option => "option",
            Self::Argument => "argument",
        }
    }
}

/// A named location in the command input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub kind: LocatorKind,
    pub name: String,
}

impl Locator {
    pub fn option(name: impl Into<String>) -> Self {
        Self {
            kind: LocatorKind::Option,
            name: name.into(),
        }
    }

    pub fn argument(name: impl Into<String>) -> Self {
        Self {
            kind: LocatorKind::Argument,
            name: name.into(),
        }
    }

    /// Parse a comma-separated list such as `argument.rte_id,option.rte`.
    pub fn parse_list(list: &str) -> Result<Vec<Self>> {
        list.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse::<Self>)
            .collect()
    }
}

impl FromStr for Locator {
    type Err = RunenvError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RunenvError::InvalidLocator {
            locator: s.to_string(),
        };
        let (kind, name) = s.split_once('.').ok_or_else(invalid)?;
        if name.is_empty() {
            return Err(invalid());
        }
        match kind {
            "option" => Ok(Self::option(name)),
            "argument" => Ok(Self::argument(name)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind.as_str(), self.name)
    }
}

/// Option and argument values of one command invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandInput {
    values: BTreeMap<LocatorKind, BTreeMap<String, String>>,
}

impl CommandInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an option value; `None` leaves the option unset.
    pub fn with_option(self, name: &str, value: Option<&str>) -> Self {
        self.with(LocatorKind::Option, name, value)
    }

    /// Record an argument value; `None` leaves the argument unset.
    pub fn with_argument(self, name: &str, value: Option<&str>) -> Self {
        self.with(LocatorKind::Argument, name, value)
    }

    fn with(mut self, kind: LocatorKind, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.values
                .entry(kind)
                .or_default()
                .insert(name.to_string(), value.to_string());
        }
        self
    }

    /// The value at `locator`, if any.
    pub fn resolve(&self, locator: &Locator) -> Option<&str> {
        self.values
            .get(&locator.kind)?
            .get(&locator.name)
            .map(String::as_str)
    }
}

/// Check every located value against the registry.
///
/// Unset and empty values are skipped: choosing an environment is optional
/// wherever a locator points. The first value that is not a registry key
/// aborts with [`RunenvError::UnknownEnvironment`].
pub fn validate(locators: &[Locator], input: &CommandInput, registry: &Registry) -> Result<()> {
    for locator in locators {
        let Some(value) = input.resolve(locator).filter(|v| !v.is_empty()) else {
            continue;
        };

        if !registry.contains(value) {
            return Err(RunenvError::UnknownEnvironment {
                value: value.to_string(),
                locator: locator.to_string(),
            });
        }
        tracing::debug!("{} = '{}' is a valid runtime environment", locator, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentDescriptor;

    fn registry() -> Registry {
        Registry::from_descriptors([
            EnvironmentDescriptor::new("host", "Host").with_weight(-99),
            EnvironmentDescriptor::new("ddev", "DDev"),
        ])
    }

    #[test]
    fn parses_locators() {
        let locators = Locator::parse_list("argument.rte_id, option.rte").unwrap();
        assert_eq!(
            locators,
            [Locator::argument("rte_id"), Locator::option("rte")]
        );
        assert_eq!(locators[0].to_string(), "argument.rte_id");
    }

    #[test]
    fn rejects_malformed_locators() {
        for bad in ["rte_id", "flag.rte", "option.", ".rte"] {
            let err = bad.parse::<Locator>().unwrap_err();
            assert!(matches!(err, RunenvError::InvalidLocator { .. }), "{bad}");
        }
    }

    #[test]
    fn resolves_by_kind() {
        let input = CommandInput::new()
            .with_argument("rte", Some("host"))
            .with_option("rte", Some("ddev"));

        assert_eq!(input.resolve(&Locator::argument("rte")), Some("host"));
        assert_eq!(input.resolve(&Locator::option("rte")), Some("ddev"));
        assert_eq!(input.resolve(&Locator::option("other")), None);
    }

    #[test]
    fn known_value_passes() {
        let input = CommandInput::new().with_argument("rte_id", Some("ddev"));
        validate(&[Locator::argument("rte_id")], &input, &registry()).unwrap();
    }

    #[test]
    fn unset_and_empty_values_are_skipped() {
        let input = CommandInput::new()
            .with_argument("rte_id", None)
            .with_option("rte", Some(""));
        let locators = [Locator::argument("rte_id"), Locator::option("rte")];

        validate(&locators, &input, &Registry::default()).unwrap();
    }

    #[test]
    fn unknown_value_names_value_and_locator() {
        let input = CommandInput::new().with_argument("rte_id", Some("staging"));
        let err = validate(&[Locator::argument("rte_id")], &input, &registry()).unwrap_err();

        match &err {
            RunenvError::UnknownEnvironment { value, locator } => {
                assert_eq!(value, "staging");
                assert_eq!(locator, "argument.rte_id");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("runenv list"));
    }

    #[test]
    fn every_locator_is_checked() {
        let input = CommandInput::new()
            .with_argument("rte_id", Some("host"))
            .with_option("fallback", Some("vagrant"));
        let locators = [Locator::argument("rte_id"), Locator::option("fallback")];

        let err = validate(&locators, &input, &registry()).unwrap_err();
        assert!(err.to_string().contains("option.fallback"));
    }
}
