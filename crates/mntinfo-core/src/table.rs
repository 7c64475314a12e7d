//! Best-effort reading of whole mount tables.
//!
//! Reading never fails: a table that cannot be opened reads as empty, and
//! lines that do not match the grammar (blank lines, fields of future
//! kernels, garbage) are skipped. Callers therefore cannot tell a missing
//! process from a process without mounts, or from a process that vanished
//! while its table was read.

use std::io::BufRead;

use mntinfo_common::types::ProcessSelector;

use crate::parser::parse_line;
use crate::record::Mountinfo;
use crate::source::TableSource;

/// Reads the mount table of the selected process from `source`.
///
/// Returns an empty vector if the table cannot be opened. Unparseable lines
/// are silently skipped; the order of the remaining lines is preserved.
pub fn read_table<S>(source: &S, selector: ProcessSelector) -> Vec<Mountinfo>
where
    S: TableSource + ?Sized,
{
    let key = selector.key();
    match source.open(&key) {
        Ok(reader) => parse_table(reader),
        Err(err) => {
            tracing::debug!(key = %key, error = %err, "mount table unavailable");
            Vec::new()
        }
    }
}

/// Parses all lines of an already opened mount table.
///
/// Lines end at `\n` with an optional preceding `\r`. Bytes which are not
/// valid UTF-8 (the kernel passes path bytes through unescaped) are replaced
/// by U+FFFD, so such mounts are still listed. A read error ends the table,
/// keeping the mounts parsed so far.
pub fn parse_table(reader: impl BufRead) -> Vec<Mountinfo> {
    let mut mounts = Vec::new();
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::debug!(error = %err, "mount table read aborted");
                break;
            }
        };
        let decoded = String::from_utf8_lossy(&line);
        let text = decoded.strip_suffix('\r').unwrap_or(&*decoded);
        match parse_line(text) {
            Ok(mount) => mounts.push(mount),
            Err(err) => tracing::trace!(line = idx + 1, error = %err, "skipping mountinfo line"),
        }
    }
    mounts
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use super::*;
    use crate::source::MemorySource;

    const SYSFS_LINE: &str =
        "24 31 0:22 / /sys rw,nosuid,nodev,noexec,relatime shared:7 - sysfs sysfs rw";
    const PROC_LINE: &str =
        "25 31 0:23 / /proc rw,nosuid,nodev,noexec,relatime shared:12 - proc proc rw";

    #[test]
    fn read_table_skips_garbage_lines() {
        let text = format!("{SYSFS_LINE}\nLinus had a little penguin\n{PROC_LINE}\n");
        let source = MemorySource::new().with_table("self", text);
        let mounts = read_table(&source, ProcessSelector::Current);
        assert_eq!(mounts.len(), 2);
        assert_eq!(mounts[0].mount_point, "/sys");
        assert_eq!(mounts[1].mount_point, "/proc");
    }

    #[test]
    fn read_table_resolves_pid_key() {
        let text = format!("{SYSFS_LINE}\n{PROC_LINE}\n");
        let source = MemorySource::new().with_table("42", text);
        assert_eq!(read_table(&source, ProcessSelector::Pid(42)).len(), 2);
        assert!(read_table(&source, ProcessSelector::Current).is_empty());
    }

    #[test]
    fn read_table_missing_process_is_empty() {
        let source = MemorySource::new();
        assert!(read_table(&source, ProcessSelector::Pid(42)).is_empty());
    }

    #[test]
    fn parse_table_accepts_crlf_and_missing_final_newline() {
        let text = format!("{SYSFS_LINE}\r\n\n{PROC_LINE}");
        let mounts = parse_table(text.as_bytes());
        assert_eq!(mounts.len(), 2);
        assert_eq!(mounts[0].super_options, "rw");
    }

    #[test]
    fn parse_table_keeps_non_utf8_lines() {
        let mut text = Vec::new();
        text.extend_from_slice(SYSFS_LINE.as_bytes());
        text.extend_from_slice(b"\n1 2 3:4 / /mnt/\xff rw - ext4 /dev/sda1 rw\n");
        text.extend_from_slice(PROC_LINE.as_bytes());
        let mounts = parse_table(text.as_slice());
        assert_eq!(mounts.len(), 3);
        assert_eq!(mounts[1].mount_point, "/mnt/\u{fffd}");
        assert_eq!(mounts[1].fs_type, "ext4");
    }

    #[test]
    fn parse_table_keeps_nsfs_mount_at_non_utf8_path() {
        let text = b"610 29 0:4 net:[4026532757] /run/netns/\xfe\xff rw - nsfs nsfs rw\n";
        let mounts = parse_table(&text[..]);
        assert_eq!(mounts.len(), 1);
        assert_eq!(mounts[0].root, "net:[4026532757]");
    }

    #[test]
    fn parse_table_keeps_mounts_read_before_error() {
        struct FailAfter<'a>(&'a [u8]);

        impl Read for FailAfter<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.0.is_empty() {
                    return Err(io::Error::other("table vanished"));
                }
                let n = self.0.read(buf)?;
                Ok(n)
            }
        }

        let text = format!("{SYSFS_LINE}\n");
        let reader = io::BufReader::new(FailAfter(text.as_bytes()));
        let mounts = parse_table(reader);
        assert_eq!(mounts.len(), 1);
    }
}
