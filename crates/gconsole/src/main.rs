use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod dispatch;
mod logging;
mod output;

use cli::Cli;
use commands::config::{load_config, Config};
use commands::{CommandContext, CommandError, SnapshotSource};
use dispatch::{LocalCommand, LocalDispatch, SnapshotCommand, SnapshotDispatch};
use grid_console_filter::pagination::DEFAULT_PER_PAGE;
use grid_console_filter::SnapshotStore;
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let mut ctx = CommandContext::from_cli(cli);

    // Config, completions and help never touch the snapshot.
    if let Some(dispatch) = LocalDispatch::try_from_cli(cli) {
        return dispatch.execute(&ctx);
    }

    let config = load_config()?;
    ctx.apply_config(&config);
    let source = resolve_source(cli, &config)?;
    debug!(snapshot = %source.store.path().display(), per_page = source.per_page, "resolved snapshot");

    match SnapshotDispatch::from_cli(cli) {
        Some(dispatch) => dispatch.execute(&ctx, &source),
        None => Ok(()),
    }
}

/// Resolves the snapshot location and page size.
///
/// The snapshot path is taken, in order, from `--snapshot` (or
/// `GCONSOLE_SNAPSHOT`), the config file, and the XDG cache directory.
fn resolve_source(cli: &Cli, config: &Config) -> commands::Result<SnapshotSource> {
    let store = match cli.snapshot.as_ref().or(config.snapshot.as_ref()) {
        Some(path) => SnapshotStore::with_path(path.clone()),
        None => SnapshotStore::new()?,
    };
    let per_page = config.table.per_page.unwrap_or(DEFAULT_PER_PAGE);
    Ok(SnapshotSource { store, per_page })
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Store(_) => "SNAPSHOT_ERROR",
        CommandError::UnknownOption { .. } => "UNKNOWN_OPTION",
        CommandError::RoleNotFound { .. } => "ROLE_NOT_FOUND",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::UnknownOption { .. } => ExitCode::from(1),
        CommandError::Json(_) => ExitCode::from(1),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::RoleNotFound { .. } => ExitCode::from(4),
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Store(_) => ExitCode::from(5),
    }
}
