//! Per-mount record as found in `/proc/[pid]/mountinfo`.
//!
//! For the meaning of the individual fields see `proc(5)`, section
//! `/proc/[pid]/mountinfo`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use mntinfo_common::constants::OPTIONAL_FIELDS_SEPARATOR;
use mntinfo_common::error::ParseError;
use serde::{Deserialize, Serialize};

/// Information about a single mount, parsed from one mountinfo line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mountinfo {
    /// Unique ID of the mount; might be reused after `umount(2)`.
    pub mount_id: i64,
    /// ID of the parent mount, or of itself at the root of a mount tree.
    pub parent_id: i64,
    /// Major ID of `st_dev` for files on this filesystem.
    pub device_major: i64,
    /// Minor ID of `st_dev` for files on this filesystem.
    pub device_minor: i64,
    /// Pathname of the directory in the filesystem forming the root of this mount.
    pub root: String,
    /// Pathname of the mount point relative to the process's root directory.
    pub mount_point: String,
    /// Per-mount options, in field order.
    pub mount_options: Vec<String>,
    /// Optional fields `tag[:value]`; a tag without value maps to `""`.
    pub tags: BTreeMap<String, String>,
    /// Filesystem type in the form `type[.subtype]`.
    pub fs_type: String,
    /// Filesystem-specific information, or `"none"`.
    pub source: String,
    /// Per-superblock options, kept as one opaque string.
    pub super_options: String,
}

impl Mountinfo {
    /// Returns the device as `major:minor`.
    #[must_use]
    pub fn device(&self) -> String {
        format!("{}:{}", self.device_major, self.device_minor)
    }

    /// Returns the value of an optional field, such as `shared` or `master`.
    #[must_use]
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }
}

impl FromStr for Mountinfo {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_line(line)
    }
}

/// Renders the record in mountinfo line form, optional fields in tag order.
impl fmt::Display for Mountinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}:{} {} {} {}",
            self.mount_id,
            self.parent_id,
            self.device_major,
            self.device_minor,
            self.root,
            self.mount_point,
            self.mount_options.join(","),
        )?;
        for (name, value) in &self.tags {
            if value.is_empty() && !name.is_empty() {
                write!(f, " {name}")?;
            } else {
                write!(f, " {name}:{value}")?;
            }
        }
        write!(
            f,
            " {OPTIONAL_FIELDS_SEPARATOR} {} {} {}",
            self.fs_type, self.source, self.super_options
        )
    }
}
