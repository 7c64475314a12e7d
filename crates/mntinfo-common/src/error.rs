//! Unified error types for the mntinfo workspace.
//!
//! [`ParseError`] describes why a single mount table line was rejected.
//! [`MntinfoError`] is the workspace-wide error that wraps it together with
//! I/O and serialization failures.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Positional field of a mountinfo line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// (1) mount ID.
    MountId,
    /// (2) parent mount ID.
    ParentId,
    /// (3) `major:minor` device pair.
    Device,
    /// (4) root of the mount within the filesystem.
    Root,
    /// (5) mount point.
    MountPoint,
    /// (6) per-mount options.
    MountOptions,
    /// (7) optional `tag[:value]` fields.
    Tags,
    /// (9) filesystem type.
    FsType,
    /// (10) mount source.
    Source,
    /// (11) per-superblock options.
    SuperOptions,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MountId => write!(f, "mount ID"),
            Self::ParentId => write!(f, "parent ID"),
            Self::Device => write!(f, "major:minor"),
            Self::Root => write!(f, "root"),
            Self::MountPoint => write!(f, "mount point"),
            Self::MountOptions => write!(f, "mount options"),
            Self::Tags => write!(f, "optional fields"),
            Self::FsType => write!(f, "filesystem type"),
            Self::Source => write!(f, "mount source"),
            Self::SuperOptions => write!(f, "super options"),
        }
    }
}

/// Reason a mountinfo line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line ended, or an empty token was found, where a field was expected.
    #[error("not enough elements in mountinfo line: missing {field}")]
    MissingField {
        /// Field that could not be extracted.
        field: Field,
    },

    /// A numeric field did not hold an integer.
    #[error("invalid {field} {value:?}: not an integer")]
    InvalidInteger {
        /// Field that failed to parse.
        field: Field,
        /// Offending token.
        value: String,
    },

    /// The device field was not two colon-joined integers.
    #[error("malformed major:minor field {value:?}")]
    MalformedDevice {
        /// Offending token.
        value: String,
    },

    /// The line ran out before the optional fields separator.
    #[error("missing optional fields separator \"-\"")]
    MissingSeparator,
}

impl ParseError {
    /// Returns the field the parser was extracting when it failed.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::MissingField { field } | Self::InvalidInteger { field, .. } => *field,
            Self::MalformedDevice { .. } => Field::Device,
            Self::MissingSeparator => Field::Tags,
        }
    }
}

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MntinfoError {
    /// A mount table could not be opened or read.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A requested mount table does not exist in the table source.
    #[error("mount table not found: {key}")]
    NotFound {
        /// Lookup key of the missing table.
        key: String,
    },

    /// A mountinfo line failed to parse.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, MntinfoError>;
