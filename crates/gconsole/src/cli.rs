//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the gconsole CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// gconsole - search the data-grid console's access-management tables
#[derive(Parser, Debug)]
#[command(name = "gconsole")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Snapshot file to read (default: from config, then the XDG cache dir)
    #[arg(long, global = true, env = "GCONSOLE_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Search and paging arguments shared by every table command.
#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Search term (case-insensitive substring)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Page to show (1-based)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Rows per page (default: from config, then 10)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: Option<u32>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List roles
    #[command(alias = "r")]
    Roles {
        /// Field to search: "Name", "Cache manager permissions" or "Cache permissions"
        #[arg(short, long)]
        by: Option<String>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// List the permissions of a role
    #[command(alias = "p")]
    Permissions {
        /// Role name
        role: String,

        /// Field to search: "Name", "Category" or "Description"
        #[arg(short, long)]
        by: Option<String>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// List the caches a role can access
    #[command(alias = "c")]
    Caches {
        /// Role name
        role: String,

        /// Field to search: "Cache name", "Cache type" or "Health"
        #[arg(short, long)]
        by: Option<String>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// List the principals mapped to a role
    Principals {
        /// Role name
        role: String,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Match role names against a pattern (invalid patterns match literally)
    Names {
        /// Regular expression or literal text
        term: String,
    },

    /// View and edit configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_roles_with_search_and_option() {
        let cli = Cli::parse_from([
            "gconsole",
            "roles",
            "--by",
            "Cache permissions",
            "--search",
            "write",
            "--per-page",
            "5",
        ]);
        if let Some(Commands::Roles { by, table }) = cli.command {
            assert_eq!(by.as_deref(), Some("Cache permissions"));
            assert_eq!(table.search.as_deref(), Some("write"));
            assert_eq!(table.page, 1);
            assert_eq!(table.per_page, Some(5));
        } else {
            panic!("Expected Roles command");
        }
    }

    #[test]
    fn test_caches_positional_role() {
        let cli = Cli::parse_from(["gconsole", "caches", "admin", "-b", "health", "-s", "degr"]);
        if let Some(Commands::Caches { role, by, table }) = cli.command {
            assert_eq!(role, "admin");
            assert_eq!(by.as_deref(), Some("health"));
            assert_eq!(table.search.as_deref(), Some("degr"));
        } else {
            panic!("Expected Caches command");
        }
    }

    #[test]
    fn test_page_must_be_positive() {
        assert!(Cli::try_parse_from(["gconsole", "roles", "--page", "1"]).is_ok());
        assert!(Cli::try_parse_from(["gconsole", "roles", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["gconsole", "roles", "--per-page", "0"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["gconsole", "principals", "admin", "--json", "--no-color"]);
        assert!(cli.json);
        assert!(cli.no_color);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["gconsole", "-q", "-v", "roles"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["gconsole", "config", "set", "table.per_page", "25"]);
        if let Some(Commands::Config {
            command: Some(ConfigCommands::Set { key, value }),
        }) = cli.command
        {
            assert_eq!(key, "table.per_page");
            assert_eq!(value, "25");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn test_completions() {
        let cli = Cli::parse_from(["gconsole", "completions", "zsh"]);
        if let Some(Commands::Completions { shell }) = cli.command {
            assert!(matches!(shell, Shell::Zsh));
        } else {
            panic!("Expected Completions command");
        }
    }
}
