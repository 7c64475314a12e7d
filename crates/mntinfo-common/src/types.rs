//! Domain primitive types used across the mntinfo workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SELF_KEY;

/// Selects whose mount table to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessSelector {
    /// The calling process (`/proc/self`).
    #[default]
    Current,
    /// A specific process by its PID.
    Pid(u64),
}

impl ProcessSelector {
    /// Builds a selector from a raw PID, where any value `<= 0` (by
    /// convention `-1`) means the current process.
    #[must_use]
    pub fn from_raw(pid: i64) -> Self {
        u64::try_from(pid)
            .ok()
            .filter(|&pid| pid > 0)
            .map_or(Self::Current, Self::Pid)
    }

    /// Returns the lookup key of this selector below the proc root.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Current => SELF_KEY.to_string(),
            Self::Pid(pid) => pid.to_string(),
        }
    }
}

impl From<i64> for ProcessSelector {
    fn from(pid: i64) -> Self {
        Self::from_raw(pid)
    }
}

impl fmt::Display for ProcessSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "{SELF_KEY}"),
            Self::Pid(pid) => write!(f, "pid {pid}"),
        }
    }
}
