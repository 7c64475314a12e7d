//! Output helpers for CLI commands.
//!
//! Results go to stdout through a locked handle; an empty result prints
//! nothing in line mode and `[]` in JSON mode.

use std::fmt::Display;
use std::io::{self, Write};

use serde::Serialize;

/// Writes one item per line.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_lines<T: Display>(items: &[T]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_lines(&mut stdout.lock(), items)
}

/// Writes the items as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn print_json<T: Serialize>(items: &[T]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    write_json(&mut stdout.lock(), items)
}

fn write_lines<W: Write, T: Display>(out: &mut W, items: &[T]) -> anyhow::Result<()> {
    for item in items {
        writeln!(out, "{item}")?;
    }
    out.flush()?;
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, items: &[T]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, items)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
