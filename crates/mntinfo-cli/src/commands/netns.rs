//! `mntinfo netns` — Find bind-mounted network namespaces.
//!
//! Namespaces are represented by the `nsfs` filesystem. Tools like Docker
//! or `ip netns` bind-mount network namespaces outside `/proc` to keep them
//! alive even when no process is left inside them.

use clap::Args;
use mntinfo_common::constants::{NET_NAMESPACE_KIND, NSFS_TYPE};
use mntinfo_core::query::namespace_mounts;
use mntinfo_core::source::TableSource;
use mntinfo_core::{MountTable, Mountinfo};

use super::PidArg;
use crate::output;

/// Arguments for the `netns` command.
#[derive(Args, Debug)]
pub struct NetnsArgs {
    /// Process whose mount namespace is searched.
    #[command(flatten)]
    pub pid: PidArg,
}

/// Executes the `netns` command, printing `net:[inode] at /mount/point`
/// lines sorted by namespace.
///
/// # Errors
///
/// Returns an error if the namespaces cannot be written to stdout.
pub fn execute<S: TableSource>(table: &MountTable<S>, args: &NetnsArgs) -> anyhow::Result<()> {
    let mounts = table.by_type(args.pid.selector(), NSFS_TYPE);
    output::print_lines(&describe(&mounts))
}

fn describe(mounts: &[Mountinfo]) -> Vec<String> {
    namespace_mounts(mounts, NET_NAMESPACE_KIND)
        .into_iter()
        .map(|mount| format!("{} at {}", mount.root, mount.mount_point))
        .collect()
}

#[cfg(test)]
mod tests {
    use mntinfo_common::types::ProcessSelector;
    use mntinfo_core::source::MemorySource;

    use super::*;

    #[test]
    fn describe_lists_network_namespaces_sorted() {
        let text = "\
25 31 0:23 / /proc rw - proc proc rw
611 29 0:4 net:[4026532999] /run/netns/blue rw shared:292 - nsfs nsfs rw
612 29 0:4 mnt:[4026532100] /run/mnt/a rw - nsfs nsfs rw
610 29 0:4 net:[4026532757] /run/docker/netns/4281a40c1612 rw shared:291 - nsfs nsfs rw
";
        let table = MountTable::new(MemorySource::new().with_table("self", text));
        let mounts = table.by_type(ProcessSelector::Current, NSFS_TYPE);
        assert_eq!(
            describe(&mounts),
            [
                "net:[4026532757] at /run/docker/netns/4281a40c1612",
                "net:[4026532999] at /run/netns/blue",
            ]
        );
    }

    #[test]
    fn describe_without_namespaces_is_empty() {
        assert!(describe(&[]).is_empty());
    }
}
