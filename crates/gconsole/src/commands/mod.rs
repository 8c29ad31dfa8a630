//! Command implementations for the gconsole CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod caches;
pub mod completions;
pub mod config;
pub mod lookup;
pub mod names;
pub mod permissions;
pub mod principals;
pub mod roles;

use std::env;

use grid_console_filter::{Pagination, RoleDetailState, Snapshot, SnapshotStore};

use crate::cli::{Cli, TableArgs};
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Snapshot store error.
    #[error("snapshot error: {0}")]
    Store(#[from] grid_console_filter::StoreError),

    /// The `--by` value names no search option of the table.
    #[error(
        "unknown search option '{input}' for {table}. Valid options: {valid}{}",
        lookup::did_you_mean(.suggestion)
    )]
    UnknownOption {
        table: &'static str,
        input: String,
        valid: String,
        suggestion: Option<String>,
    },

    /// The snapshot has no detail for the requested role.
    #[error("role '{name}' not found in snapshot{}", lookup::did_you_mean(.suggestion))]
    RoleNotFound {
        name: String,
        suggestion: Option<String>,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing output settings.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Colors are disabled by `--no-color` and by a non-empty `NO_COLOR`.
    pub fn from_cli(cli: &Cli) -> Self {
        let no_color_env = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }

    /// Applies output preferences from the config file. Flags still win:
    /// config can only turn colors off.
    pub fn apply_config(&mut self, config: &Config) {
        if config.output.color == Some(false) {
            self.use_colors = false;
        }
    }
}

/// Where table commands read their data from, and how they page it.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    pub store: SnapshotStore,
    pub per_page: usize,
}

impl SnapshotSource {
    pub fn load(&self) -> Result<Snapshot> {
        Ok(self.store.load_or_default()?)
    }

    /// Pagination requested by the table arguments, falling back to the
    /// configured page size.
    pub fn pagination(&self, args: &TableArgs) -> Pagination {
        let per_page = args.per_page.map_or(self.per_page, |n| n as usize);
        Pagination::new(args.page as usize, per_page)
    }
}

/// Opens the detail page of `name`, the way the console's role detail page does.
pub fn open_role(snapshot: &Snapshot, name: &str) -> Result<RoleDetailState> {
    let detail = snapshot.role_detail(name);
    let role_name = detail.map_or(name, |d| d.name.as_str());

    let mut state = RoleDetailState::new();
    if !state.load_role(role_name) {
        return Err(CommandError::RoleNotFound {
            name: name.to_string(),
            suggestion: None,
        });
    }
    state.complete(
        detail
            .cloned()
            .ok_or_else(|| format!("role '{name}' not found")),
    );

    if state.error().is_some() {
        let candidates = snapshot.role_details.iter().map(|d| d.name.as_str());
        return Err(CommandError::RoleNotFound {
            name: name.to_string(),
            suggestion: lookup::find_similar_name(name, candidates),
        });
    }
    Ok(state)
}
