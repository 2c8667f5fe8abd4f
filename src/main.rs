//! runenv CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use runenv::cli::{Cli, CommandDispatcher};
use runenv::config::find_project_root;
use runenv::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for an invalid argument, such as an unknown environment id.
const EXIT_INVALID_ARGUMENT: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so status output is left to the UI
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("runenv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("runenv=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("runenv starting with args: {:?}", cli);

    let mut ui = create_ui(OutputMode::from_flags(cli.verbose, cli.quiet), cli.no_color);

    let project_root = cli.project.clone().unwrap_or_else(|| {
        let cwd = std::env::current_dir().unwrap_or_default();
        find_project_root(&cwd).unwrap_or(cwd)
    });

    let dispatcher = CommandDispatcher::new(project_root).with_config_path(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            ui.error(&e.to_string());
            if e.is_invalid_argument() {
                ExitCode::from(EXIT_INVALID_ARGUMENT)
            } else {
                ExitCode::from(1)
            }
        }
    }
}
