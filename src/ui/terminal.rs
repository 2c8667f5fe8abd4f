//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, RunenvTheme, UserInterface};

/// Writes data and status to stdout, errors and hints to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: RunenvTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode, theme: RunenvTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn data(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        if !text.ends_with('\n') {
            writeln!(self.out).ok();
        }
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_hints() {
            writeln!(self.err, "{}", self.theme.format_hint(msg)).ok();
        }
    }
}

/// Create the UI for a command invocation.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let theme = if no_color || !should_use_colors() {
        RunenvTheme::plain()
    } else {
        RunenvTheme::new()
    };
    Box::new(TerminalUI::new(mode, theme))
}
