//! Switch command implementation.
//!
//! The `runenv switch <RTE_ID>` command hands the selected runtime
//! environment to the activation task.

use crate::cli::args::SwitchArgs;
use crate::environment::{switch, Activator, CommandInput, Locator, Registry, ShellActivator};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The switch command implementation.
pub struct SwitchCommand {
    registry: Registry,
    activator: Box<dyn Activator>,
    args: SwitchArgs,
}

impl SwitchCommand {
    /// Create a switch command that activates through the configured command.
    pub fn new(context: &ProjectContext, args: SwitchArgs) -> Self {
        let activator = ShellActivator::new(
            context.config.activation.command.clone(),
            &context.project_root,
        );
        Self::with_activator(context, args, Box::new(activator))
    }

    pub fn with_activator(
        context: &ProjectContext,
        args: SwitchArgs,
        activator: Box<dyn Activator>,
    ) -> Self {
        Self {
            registry: context.registry.clone(),
            activator,
            args,
        }
    }
}

impl Command for SwitchCommand {
    fn environment_locators(&self) -> Vec<Locator> {
        vec![Locator::argument("rte_id")]
    }

    fn input(&self) -> CommandInput {
        CommandInput::new().with_argument("rte_id", Some(self.args.rte_id.as_str()))
    }

    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let id = &self.args.rte_id;
        let outcome = switch(id, &self.registry, self.activator.as_ref())?;

        if outcome.success {
            ui.success(&format!("Switched runtime environment to '{}'", id));
            Ok(CommandResult::success())
        } else {
            let code = outcome.exit_code.filter(|code| *code != 0).unwrap_or(1);
            ui.error(&format!(
                "Activation of runtime environment '{}' failed (exit code {})",
                id, code
            ));
            Ok(CommandResult::failure(code))
        }
    }
}
