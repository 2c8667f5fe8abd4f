//! runenv - List and switch between the runtime environments of a project.
//!
//! A project can be run in several runtime environments, for example
//! directly on the host machine or inside a DDev container. runenv reads
//! which ones are enabled from `.runenv/config.yml`, checks which of those
//! are usable in the project, and hands a selected environment to a
//! configured activation command.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`environment`] - Environment registry, validation and switching
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use runenv::config::RunenvConfig;
//! use runenv::environment::Registry;
//!
//! let config: RunenvConfig = serde_yaml::from_str(
//!     "runtime_environments:\n  host:\n    enabled: true\n",
//! )
//! .unwrap();
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let registry = Registry::build(&config.runtime_environments, temp.path());
//! assert_eq!(registry.get("host").unwrap().weight, Some(-99));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{Result, RunenvError};
