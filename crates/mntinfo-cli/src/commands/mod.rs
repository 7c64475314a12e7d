//! CLI command definitions and dispatch.

pub mod list;
pub mod netns;
pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mntinfo_common::config::MntinfoConfig;
use mntinfo_common::constants::{APP_NAME, DEFAULT_PROC_ROOT, PROC_ROOT_ENV};
use mntinfo_common::types::ProcessSelector;
use mntinfo_core::MountTable;

/// mntinfo — Lists mounts from the Linux per-process mount table.
#[derive(Parser, Debug)]
#[command(name = APP_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Mount point of the proc filesystem.
    #[arg(long, global = true, env = PROC_ROOT_ENV, default_value = DEFAULT_PROC_ROOT)]
    pub proc_root: PathBuf,

    /// Format of the diagnostic log written to stderr (filtered by `RUST_LOG`).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Diagnostic log formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the mounts of a process.
    List(list::ListArgs),
    /// List the distinct filesystem types mounted, sorted.
    Types(types::TypesArgs),
    /// Find bind-mounted network namespaces.
    Netns(netns::NetnsArgs),
}

/// Selects the process whose mount table is read.
#[derive(Args, Debug, Clone, Copy)]
pub struct PidArg {
    /// PID of the process; -1 selects the current process.
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    pub pid: i64,
}

impl PidArg {
    /// Returns the process selector for this argument.
    pub fn selector(self) -> ProcessSelector {
        ProcessSelector::from_raw(self.pid)
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or output fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let config = MntinfoConfig::new(cli.proc_root).validated()?;
    tracing::debug!(proc_root = %config.proc_root.display(), "using proc root");
    let table = MountTable::from_config(&config);

    match cli.command {
        Command::List(args) => list::execute(&table, &args),
        Command::Types(args) => types::execute(&table, &args),
        Command::Netns(args) => netns::execute(&table, &args),
    }
}
