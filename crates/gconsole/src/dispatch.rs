//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split into two groups: local commands (config, completions, help)
//! that never read the snapshot, and table commands that do.

use crate::cli::{Cli, Commands, ConfigCommands, Shell, TableArgs};
use crate::commands::{self, CommandContext, CommandError, Result, SnapshotSource};

/// Trait for commands that run without a snapshot.
pub trait LocalCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that read the snapshot.
pub trait SnapshotCommand {
    fn execute(&self, ctx: &CommandContext, source: &SnapshotSource) -> Result<()>;
}

/// Commands that don't read the snapshot.
pub enum LocalDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> LocalDispatch<'a> {
    /// Try to create a local dispatch from the CLI command.
    /// Returns None if the command reads the snapshot.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl LocalCommand for LocalDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("gconsole - search the data-grid console's access-management tables");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that read the snapshot.
pub enum SnapshotDispatch<'a> {
    Roles {
        by: &'a Option<String>,
        table: &'a TableArgs,
    },
    Permissions {
        role: &'a str,
        by: &'a Option<String>,
        table: &'a TableArgs,
    },
    Caches {
        role: &'a str,
        by: &'a Option<String>,
        table: &'a TableArgs,
    },
    Principals {
        role: &'a str,
        table: &'a TableArgs,
    },
    Names {
        term: &'a str,
    },
}

impl<'a> SnapshotDispatch<'a> {
    /// Create a snapshot dispatch from the CLI command.
    /// Returns None for local commands.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Roles { by, table }) => Some(Self::Roles { by, table }),
            Some(Commands::Permissions { role, by, table }) => Some(Self::Permissions {
                role,
                by,
                table,
            }),
            Some(Commands::Caches { role, by, table }) => Some(Self::Caches { role, by, table }),
            Some(Commands::Principals { role, table }) => Some(Self::Principals { role, table }),
            Some(Commands::Names { term }) => Some(Self::Names { term }),
            _ => None,
        }
    }
}

impl SnapshotCommand for SnapshotDispatch<'_> {
    fn execute(&self, ctx: &CommandContext, source: &SnapshotSource) -> Result<()> {
        match self {
            Self::Roles { by, table } => {
                let opts = commands::roles::RolesOptions {
                    by: (*by).clone(),
                    table: (*table).clone(),
                };
                commands::roles::execute(ctx, &opts, source)
            }
            Self::Permissions { role, by, table } => {
                let opts = commands::permissions::PermissionsOptions {
                    role: role.to_string(),
                    by: (*by).clone(),
                    table: (*table).clone(),
                };
                commands::permissions::execute(ctx, &opts, source)
            }
            Self::Caches { role, by, table } => {
                let opts = commands::caches::CachesOptions {
                    role: role.to_string(),
                    by: (*by).clone(),
                    table: (*table).clone(),
                };
                commands::caches::execute(ctx, &opts, source)
            }
            Self::Principals { role, table } => {
                let opts = commands::principals::PrincipalsOptions {
                    role: role.to_string(),
                    table: (*table).clone(),
                };
                commands::principals::execute(ctx, &opts, source)
            }
            Self::Names { term } => commands::names::execute(ctx, term, source),
        }
    }
}
