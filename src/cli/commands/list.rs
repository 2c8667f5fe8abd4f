//! List command implementation.
//!
//! The `runenv list` command prints the available runtime environments,
//! lowest weight first.

use crate::cli::args::{ListArgs, ListFormat};
use crate::environment::Registry;
use crate::error::Result;
use crate::ui::theme::RunenvTheme;
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The list command implementation.
pub struct ListCommand {
    registry: Registry,
    args: ListArgs,
    colors: bool,
}

impl ListCommand {
    pub fn new(context: &ProjectContext, args: ListArgs) -> Self {
        Self {
            registry: context.registry.clone(),
            args,
            colors: should_use_colors(),
        }
    }

    /// Style the table output. Disabled by `--no-color`.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    fn render(&self) -> Result<String> {
        let listing = self.registry.listing();
        let text = match self.args.format {
            ListFormat::Yaml => serde_yaml::to_string(&listing).map_err(anyhow::Error::from)?,
            ListFormat::Json => {
                serde_json::to_string_pretty(&listing).map_err(anyhow::Error::from)? + "\n"
            }
            ListFormat::Table => self.render_table(),
        };
        Ok(text)
    }

    fn render_table(&self) -> String {
        let theme = if self.colors {
            RunenvTheme::new()
        } else {
            RunenvTheme::plain()
        };
        let list = self.registry.list();
        let width = list.iter().map(|d| d.id.len()).max().unwrap_or(0);

        list.iter()
            .map(|descriptor| {
                format!(
                    "  {}  {}\n",
                    theme
                        .highlight
                        .apply_to(format!("{:<width$}", descriptor.id)),
                    theme.dim.apply_to(&descriptor.description)
                )
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.registry.is_empty() && self.args.format == ListFormat::Table {
            ui.message("No runtime environments available.");
            ui.hint("Enable one under runtime_environments in .runenv/config.yml");
            return Ok(CommandResult::success());
        }

        ui.data(&self.render()?);
        Ok(CommandResult::success())
    }
}
