//! `mntinfo list` — List the mounts of a process.

use clap::Args;
use mntinfo_core::MountTable;
use mntinfo_core::source::TableSource;

use super::PidArg;
use crate::output;

/// Arguments for the `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Process whose mounts are listed.
    #[command(flatten)]
    pub pid: PidArg,

    /// Only list mounts of this filesystem type (e.g. "ext4", "proc", "nsfs").
    #[arg(short = 't', long = "type")]
    pub fs_type: Option<String>,

    /// Print a JSON array instead of mountinfo lines.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `list` command.
///
/// Prints nothing (or `[]` with `--json`) if the process has no readable
/// mount table.
///
/// # Errors
///
/// Returns an error if the mounts cannot be written to stdout.
pub fn execute<S: TableSource>(table: &MountTable<S>, args: &ListArgs) -> anyhow::Result<()> {
    let selector = args.pid.selector();
    let mounts = match &args.fs_type {
        Some(fs_type) => table.by_type(selector, fs_type),
        None => table.all(selector),
    };
    tracing::info!(selector = %selector, count = mounts.len(), "listing mounts");

    if args.json {
        output::print_json(&mounts)
    } else {
        output::print_lines(&mounts)
    }
}
