//! Shell command execution for the activation task.

pub mod command;

pub use command::{execute, CommandOptions, CommandResult};
