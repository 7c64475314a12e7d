//! Line grammar of `/proc/[pid]/mountinfo`, built on `nom`.
//!
//! A line consists of space-separated fields:
//!
//! ```text
//! 36 35 98:0 /mnt1 /mnt2 rw,noatime master:1 - ext3 /dev/root rw,errors=continue
//! (1)(2)(3)   (4)   (5)      (6)      (7)   (8) (9)   (10)         (11)
//! ```
//!
//! Fields (1) to (6) are positional, (7) is a variable number of optional
//! fields terminated by the single hyphen (8), followed by the positional
//! fields (9) to (11). Tokens are split off one at a time at the first
//! space; an empty token (two consecutive spaces, or a trailing space) is
//! never a valid field.

use std::collections::BTreeMap;

use mntinfo_common::constants::OPTIONAL_FIELDS_SEPARATOR;
use mntinfo_common::error::{Field, ParseError};
use nom::{
    IResult, Parser,
    bytes::complete::take_till1,
    character::complete::char,
    combinator::opt,
    sequence::terminated,
};

use crate::record::Mountinfo;

/// Splits off the next non-empty token and at most one following space.
fn token(input: &str) -> IResult<&str, &str> {
    terminated(take_till1(|c: char| c == ' '), opt(char(' '))).parse(input)
}

/// Cursor over the not yet consumed remainder of a mountinfo line.
struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    const fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn next(&mut self, field: Field) -> Result<&'a str, ParseError> {
        let (rest, tok) = token(self.rest).map_err(|_| ParseError::MissingField { field })?;
        self.rest = rest;
        Ok(tok)
    }

    fn next_int(&mut self, field: Field) -> Result<i64, ParseError> {
        let tok = self.next(field)?;
        parse_int(tok, field)
    }

    fn next_device(&mut self) -> Result<(i64, i64), ParseError> {
        let tok = self.next(Field::Device)?;
        let malformed = || ParseError::MalformedDevice {
            value: tok.to_string(),
        };
        let mut parts = tok.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), None) => Ok((
                parse_int(major, Field::Device).map_err(|_| malformed())?,
                parse_int(minor, Field::Device).map_err(|_| malformed())?,
            )),
            _ => Err(malformed()),
        }
    }

    /// Consumes optional `tag[:value]` fields up to and including the
    /// separator.
    fn next_tags(&mut self) -> Result<BTreeMap<String, String>, ParseError> {
        let mut tags = BTreeMap::new();
        loop {
            let tok = self
                .next(Field::Tags)
                .map_err(|_| ParseError::MissingSeparator)?;
            if tok == OPTIONAL_FIELDS_SEPARATOR {
                return Ok(tags);
            }
            let (name, value) = tok.split_once(':').unwrap_or((tok, ""));
            let _ = tags.insert(name.to_string(), value.to_string());
        }
    }
}

fn parse_int(tok: &str, field: Field) -> Result<i64, ParseError> {
    tok.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: tok.to_string(),
    })
}

/// Parses a single line from `/proc/[pid]/mountinfo`.
///
/// The line must not contain the trailing newline. Anything following the
/// super options field is ignored.
///
/// # Errors
///
/// Returns the [`ParseError`] of the first field that cannot be extracted;
/// no partially filled record is ever returned.
pub fn parse_line(line: &str) -> Result<Mountinfo, ParseError> {
    let mut fields = Fields::new(line);

    let mount_id = fields.next_int(Field::MountId)?;
    let parent_id = fields.next_int(Field::ParentId)?;
    let (device_major, device_minor) = fields.next_device()?;
    let root = fields.next(Field::Root)?.to_string();
    let mount_point = fields.next(Field::MountPoint)?.to_string();
    let mount_options = fields
        .next(Field::MountOptions)?
        .split(',')
        .map(str::to_string)
        .collect();
    let tags = fields.next_tags()?;
    let fs_type = fields.next(Field::FsType)?.to_string();
    let source = fields.next(Field::Source)?.to_string();
    let super_options = fields.next(Field::SuperOptions)?.to_string();

    Ok(Mountinfo {
        mount_id,
        parent_id,
        device_major,
        device_minor,
        root,
        mount_point,
        mount_options,
        tags,
        fs_type,
        source,
        super_options,
    })
}
