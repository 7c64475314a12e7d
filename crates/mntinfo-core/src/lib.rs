//! # mntinfo-core
//!
//! Reads and parses the Linux kernel's per-process mount table, as exposed
//! in `/proc/[pid]/mountinfo`. Results reflect the mounts visible in the
//! mount namespace of the selected process at the time of the call; static
//! configuration such as `/etc/fstab` is never consulted.
//!
//! Layers, leaves first:
//! - **Record**: [`Mountinfo`](record::Mountinfo), one per mount.
//! - **Parser**: strict, positional line grammar ([`parser::parse_line`]).
//! - **Source**: [`TableSource`](source::TableSource) capability with the
//!   production [`ProcFs`](source::ProcFs) and the in-memory
//!   [`MemorySource`](source::MemorySource).
//! - **Table**: best-effort reading of a whole table ([`table::read_table`]).
//! - **Query**: [`MountTable`](query::MountTable) and the `/proc` shortcuts
//!   [`mounts`], [`mounts_of_pid`], and [`mounts_of_type`].
//!
//! # Example
//!
//! ```rust,no_run
//! // Lists bind-mounted namespaces, which show up with the "nsfs" type.
//! for mount in mntinfo_core::mounts_of_type(-1, "nsfs") {
//!     println!("namespace {} at {}", mount.root, mount.mount_point);
//! }
//! ```

pub mod parser;
pub mod query;
pub mod record;
pub mod source;
pub mod table;

pub use mntinfo_common::types::ProcessSelector;
pub use query::{MountTable, mounts, mounts_of_pid, mounts_of_type};
pub use record::Mountinfo;
