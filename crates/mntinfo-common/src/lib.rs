//! # mntinfo-common
//!
//! Shared error definitions, process selectors, configuration models, and
//! constants used across the mntinfo workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the primitives the parser, the table reader,
//! and the CLI build upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
