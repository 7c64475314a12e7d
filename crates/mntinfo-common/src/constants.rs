//! System-wide constants and default paths.

/// Default mount point of the proc filesystem.
pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Environment variable overriding the proc filesystem root.
pub const PROC_ROOT_ENV: &str = "MNTINFO_PROC_ROOT";

/// Lookup key addressing the calling process below the proc root.
pub const SELF_KEY: &str = "self";

/// Name of the per-process mount table file.
pub const MOUNTINFO_FILE: &str = "mountinfo";

/// Token separating the optional fields from the trailing fixed fields.
pub const OPTIONAL_FIELDS_SEPARATOR: &str = "-";

/// Filesystem type under which the kernel exposes namespace references.
pub const NSFS_TYPE: &str = "nsfs";

/// Namespace kind of network namespaces, as shown in `nsfs` mount roots.
pub const NET_NAMESPACE_KIND: &str = "net";

/// Application name used in CLI output.
pub const APP_NAME: &str = "mntinfo";
