//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`ProjectContext`] with the configuration and registry of a project
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, ConfigPaths, RunenvConfig};
use crate::environment::{validate, CommandInput, Locator, Registry};
use crate::error::Result;
use crate::ui::{should_use_colors, UserInterface};

/// Trait for command implementations.
pub trait Command {
    /// Where this command reads runtime environment ids from.
    fn environment_locators(&self) -> Vec<Locator> {
        Vec::new()
    }

    /// The option and argument values of this invocation.
    fn input(&self) -> CommandInput {
        CommandInput::new()
    }

    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Configuration and available environments of one project.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub project_root: PathBuf,
    pub config: RunenvConfig,
    pub registry: Registry,
}

impl ProjectContext {
    /// Load the configuration and build the registry.
    pub fn load(project_root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let paths = match config_path {
            Some(path) => ConfigPaths::with_explicit(project_root, path),
            None => ConfigPaths::discover(project_root),
        };
        let config = load_config(&paths)?;
        Ok(Self::from_config(project_root, config))
    }

    pub fn from_config(project_root: &Path, config: RunenvConfig) -> Self {
        let registry = Registry::build(&config.runtime_environments, project_root);
        tracing::debug!(
            "{} runtime environment(s) available in {}",
            registry.len(),
            project_root.display()
        );
        Self {
            project_root: project_root.to_path_buf(),
            config,
            registry,
        }
    }
}

/// Validate the command's environment ids, then execute it.
///
/// Nothing in the command runs when validation fails.
pub fn run(
    command: &dyn Command,
    registry: &Registry,
    ui: &mut dyn UserInterface,
) -> Result<CommandResult> {
    validate(&command.environment_locators(), &command.input(), registry)?;
    command.execute(ui)
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Use `path` instead of the project's `.runenv/config.yml`.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn context(&self) -> Result<ProjectContext> {
        ProjectContext::load(&self.project_root, self.config_path.as_deref())
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::List(args) => {
                let context = self.context()?;
                let cmd = super::list::ListCommand::new(&context, args.clone())
                    .with_colors(!cli.no_color && should_use_colors());
                run(&cmd, &context.registry, ui)
            }
            Commands::Switch(args) => {
                let context = self.context()?;
                let cmd = super::switch::SwitchCommand::new(&context, args.clone());
                run(&cmd, &context.registry, ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
