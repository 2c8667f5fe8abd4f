//! Runtime environment registry, validation and switching.
//!
//! - [`descriptor`] - the metadata record of one environment
//! - [`kind`] - how each environment id is built and gated
//! - [`registry`] - assembling the available environments
//! - [`locator`] - validating ids found in command input
//! - [`activation`] - handing a selected environment to the activation task

pub mod activation;
pub mod descriptor;
pub mod kind;
pub mod locator;
pub mod registry;

pub use activation::{switch, ActivationOutcome, Activator, ShellActivator};
pub use descriptor::EnvironmentDescriptor;
pub use kind::{EnvironmentKind, HostKind, MarkerFileKind};
pub use locator::{validate, CommandInput, Locator, LocatorKind};
pub use registry::{Listing, Registry, RegistryBuilder};
