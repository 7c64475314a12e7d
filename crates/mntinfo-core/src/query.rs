//! Queries over the mount tables of processes.
//!
//! Every query re-reads its table, so results reflect the mounts at the
//! time of the call. There is no error for a process that does not exist:
//! its table simply reads as empty, same as for a process without mounts.

use std::collections::BTreeSet;

use mntinfo_common::config::MntinfoConfig;
use mntinfo_common::constants::NSFS_TYPE;
use mntinfo_common::types::ProcessSelector;

use crate::record::Mountinfo;
use crate::source::{ProcFs, TableSource};
use crate::table::read_table;

/// Mount tables served by an injected [`TableSource`].
#[derive(Debug, Clone, Default)]
pub struct MountTable<S = ProcFs> {
    source: S,
}

impl MountTable<ProcFs> {
    /// Creates a table over the proc filesystem mounted at `/proc`.
    #[must_use]
    pub fn procfs() -> Self {
        Self::new(ProcFs::default())
    }

    /// Creates a table over the configured proc root.
    #[must_use]
    pub fn from_config(config: &MntinfoConfig) -> Self {
        Self::new(ProcFs::from_config(config))
    }
}

impl<S: TableSource> MountTable<S> {
    /// Creates a table over the given source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns all mounts of the selected process, in table order.
    pub fn all(&self, selector: ProcessSelector) -> Vec<Mountinfo> {
        read_table(&self.source, selector)
    }

    /// Returns the mounts of the selected process whose filesystem type
    /// equals `fs_type`, in table order.
    pub fn by_type(&self, selector: ProcessSelector, fs_type: &str) -> Vec<Mountinfo> {
        let mounts = self.all(selector);
        tracing::debug!(selector = %selector, fs_type, total = mounts.len(), "filtering mounts by type");
        mounts
            .into_iter()
            .filter(|mount| mount.fs_type == fs_type)
            .collect()
    }
}

/// Returns all mounts of the current process.
///
/// Returns an empty vector if `/proc/self/mountinfo` cannot be read.
pub fn mounts() -> Vec<Mountinfo> {
    MountTable::procfs().all(ProcessSelector::Current)
}

/// Returns all mounts of the process `pid`, or of the current process when
/// `pid` is `-1` (or any other value `<= 0`).
///
/// Returns an empty vector if the process does not exist.
pub fn mounts_of_pid(pid: i64) -> Vec<Mountinfo> {
    MountTable::procfs().all(ProcessSelector::from_raw(pid))
}

/// Returns the mounts of the process `pid` (`-1` for the current process)
/// with the given filesystem type, such as `"ext4"`, `"proc"`, or `"nsfs"`.
///
/// Returns an empty vector if the process does not exist.
pub fn mounts_of_type(pid: i64, fs_type: &str) -> Vec<Mountinfo> {
    MountTable::procfs().by_type(ProcessSelector::from_raw(pid), fs_type)
}

/// Returns the distinct filesystem types of `mounts`, sorted.
pub fn fs_types(mounts: &[Mountinfo]) -> Vec<String> {
    mounts
        .iter()
        .map(|mount| mount.fs_type.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Returns the bind-mounted namespaces of the given kind (such as `"net"`),
/// sorted by their `kind:[inode]` root.
///
/// Tools like `ip netns` or Docker keep namespaces alive by bind-mounting
/// them; these mounts have the `nsfs` filesystem type.
pub fn namespace_mounts<'a>(mounts: &'a [Mountinfo], kind: &str) -> Vec<&'a Mountinfo> {
    let mut namespaces: Vec<_> = mounts
        .iter()
        .filter(|mount| mount.fs_type == NSFS_TYPE && is_namespace_root(&mount.root, kind))
        .collect();
    namespaces.sort_by(|a, b| a.root.cmp(&b.root));
    namespaces
}

fn is_namespace_root(root: &str, kind: &str) -> bool {
    root.strip_prefix(kind)
        .and_then(|rest| rest.strip_prefix(":["))
        .is_some_and(|rest| rest.ends_with(']'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    const TABLE: &str = "\
24 31 0:22 / /sys rw,nosuid,nodev,noexec,relatime shared:7 - sysfs sysfs rw
25 31 0:23 / /proc rw,nosuid,nodev,noexec,relatime shared:12 - proc proc rw
610 29 0:4 net:[4026532757] /run/docker/netns/4281a40c1612 rw shared:291 - nsfs nsfs rw
";

    fn table() -> MountTable<MemorySource> {
        MountTable::new(MemorySource::new().with_table("self", TABLE))
    }

    #[test]
    fn all_returns_every_mount_in_order() {
        let mounts = table().all(ProcessSelector::Current);
        let points: Vec<_> = mounts.iter().map(|m| m.mount_point.as_str()).collect();
        assert_eq!(points, ["/sys", "/proc", "/run/docker/netns/4281a40c1612"]);
    }

    #[test]
    fn by_type_returns_only_matching_mounts() {
        let mounts = table().by_type(ProcessSelector::Current, "nsfs");
        assert_eq!(mounts.len(), 1);
        assert_eq!(mounts[0].root, "net:[4026532757]");
    }

    #[test]
    fn by_type_requires_exact_match() {
        assert!(table().by_type(ProcessSelector::Current, "ns").is_empty());
        assert!(table().by_type(ProcessSelector::Current, "NSFS").is_empty());
    }

    #[test]
    fn by_type_for_missing_process_is_empty() {
        assert!(table().by_type(ProcessSelector::Pid(42), "proc").is_empty());
    }

    #[test]
    fn fs_types_are_unique_and_sorted() {
        let mut mounts = table().all(ProcessSelector::Current);
        mounts.extend(table().all(ProcessSelector::Current));
        assert_eq!(fs_types(&mounts), ["nsfs", "proc", "sysfs"]);
    }

    #[test]
    fn namespace_mounts_sorted_by_root() {
        let text = "\
1 1 0:4 net:[4026532999] /run/netns/b rw - nsfs nsfs rw
2 1 0:4 mnt:[4026532100] /run/mnt/a rw - nsfs nsfs rw
3 1 0:4 net:[4026532111] /run/netns/a rw - nsfs nsfs rw
4 1 0:5 net:[4026532000] /weird rw - tmpfs tmpfs rw
";
        let mounts = MountTable::new(MemorySource::new().with_table("self", text))
            .all(ProcessSelector::Current);
        let netns: Vec<_> = namespace_mounts(&mounts, "net")
            .into_iter()
            .map(|m| m.mount_point.as_str())
            .collect();
        assert_eq!(netns, ["/run/netns/a", "/run/netns/b"]);
    }

    #[test]
    fn namespace_root_requires_kind_and_brackets() {
        assert!(is_namespace_root("net:[1]", "net"));
        assert!(!is_namespace_root("netx:[1]", "net"));
        assert!(!is_namespace_root("net:1", "net"));
        assert!(!is_namespace_root("/", "net"));
    }
}
