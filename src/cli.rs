//! Command-line interface for vimterm.
//!
//! Parses flags and subcommands into [`RuntimeOptions`] for [`crate::app`].

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// vimterm - resolve and inspect terminal settings
#[derive(Parser, Debug)]
#[command(name = "vimterm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Preference file (default: ~/.config/vimterm/preferences.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub prefs: Option<PathBuf>,

    /// YAML file overriding the compiled-in defaults
    #[arg(long, value_name = "PATH", global = true)]
    pub defaults: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", global = true, value_parser = parse_level)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved settings (the default)
    Show {
        /// Keep running and print again whenever the preference file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Store a preference in the preference file
    Set {
        /// Preference key, e.g. `fontsize`
        key: String,
        /// Value; `true` and `false` are stored as booleans, anything else as text
        value: String,
    },

    /// Remove a preference from the preference file
    Unset {
        /// Preference key
        key: String,
    },
}

/// Options handed from the CLI to the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub command: Commands,
    pub prefs: Option<PathBuf>,
    pub defaults: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            command: cli.command.unwrap_or(Commands::Show { watch: false }),
            prefs: cli.prefs,
            defaults: cli.defaults,
            log_level: cli.log_level,
        }
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level '{value}'"))
}

/// Parse the process arguments.
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}
