//! `mntinfo types` — List the distinct filesystem types mounted.

use clap::Args;
use mntinfo_core::MountTable;
use mntinfo_core::query::fs_types;
use mntinfo_core::source::TableSource;

use super::PidArg;
use crate::output;

/// Arguments for the `types` command.
#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Process whose mounts are inspected.
    #[command(flatten)]
    pub pid: PidArg,
}

/// Executes the `types` command, printing one filesystem type per line in
/// alphabetical order.
///
/// # Errors
///
/// Returns an error if the types cannot be written to stdout.
pub fn execute<S: TableSource>(table: &MountTable<S>, args: &TypesArgs) -> anyhow::Result<()> {
    let mounts = table.all(args.pid.selector());
    output::print_lines(&fs_types(&mounts))
}
