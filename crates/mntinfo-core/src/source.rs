//! Sources of raw mount table text.
//!
//! The [`TableSource`] trait lets the table reader work on the real proc
//! filesystem in production and on canned text in tests.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use mntinfo_common::config::MntinfoConfig;
use mntinfo_common::constants::MOUNTINFO_FILE;
use mntinfo_common::error::{MntinfoError, Result};

/// Capability to open the mount table stored under a lookup key.
///
/// Keys are `"self"` for the calling process or a decimal PID.
pub trait TableSource: Send + Sync {
    /// Opens the line stream of the mount table for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if no table exists for `key` or it cannot be opened.
    fn open(&self, key: &str) -> Result<Box<dyn BufRead + '_>>;
}

/// The proc filesystem, reading `<root>/<key>/mountinfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcFs {
    root: PathBuf,
}

impl ProcFs {
    /// Creates a source reading below the given proc root.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a source for the configured proc root.
    #[must_use]
    pub fn from_config(config: &MntinfoConfig) -> Self {
        Self::new(config.proc_root.clone())
    }

    /// Returns the proc root this source reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the mount table for `key`.
    #[must_use]
    pub fn mountinfo_path(&self, key: &str) -> PathBuf {
        self.root.join(key).join(MOUNTINFO_FILE)
    }
}

impl Default for ProcFs {
    fn default() -> Self {
        Self::from_config(&MntinfoConfig::default())
    }
}

impl TableSource for ProcFs {
    fn open(&self, key: &str) -> Result<Box<dyn BufRead + '_>> {
        let path = self.mountinfo_path(key);
        tracing::trace!(path = %path.display(), "opening mount table");
        let file = File::open(&path).map_err(|source| MntinfoError::Io { path, source })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// In-memory mount tables keyed by lookup key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    tables: BTreeMap<String, String>,
}

impl MemorySource {
    /// Creates an empty source without any table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the table text for `key`.
    #[must_use]
    pub fn with_table(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Inserts (or replaces) the table text for `key`.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let _ = self.tables.insert(key.into(), text.into());
    }
}

impl TableSource for MemorySource {
    fn open(&self, key: &str) -> Result<Box<dyn BufRead + '_>> {
        self.tables
            .get(key)
            .map(|text| Box::new(Cursor::new(text.as_bytes())) as Box<dyn BufRead + '_>)
            .ok_or_else(|| MntinfoError::NotFound {
                key: key.to_string(),
            })
    }
}
