//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait. Commands that read
//! runtime environment ids from their input declare where through
//! [`Command::environment_locators`]; [`CommandDispatcher`] validates those
//! values before the command runs.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod switch;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ProjectContext};
