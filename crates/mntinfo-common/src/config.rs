//! Configuration model for reading mount tables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PROC_ROOT;
use crate::error::{MntinfoError, Result};

/// Root configuration for mount table access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MntinfoConfig {
    /// Mount point of the proc filesystem whose `<pid>/mountinfo` files are read.
    pub proc_root: PathBuf,
}

impl MntinfoConfig {
    /// Creates a configuration reading from the given proc root.
    #[must_use]
    pub fn new(proc_root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: proc_root.into(),
        }
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the proc root is empty.
    pub fn validated(self) -> Result<Self> {
        if self.proc_root.as_os_str().is_empty() {
            return Err(MntinfoError::Config {
                message: "proc root must not be empty".into(),
            });
        }
        Ok(self)
    }
}

impl Default for MntinfoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROC_ROOT)
    }
}
