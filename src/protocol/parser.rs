//! Line parser
//!
//! Tokenizes one input line into a command name and up to two quoted
//! arguments, then validates per command.
//!
//! Both argument extraction passes always run, whatever the command: an
//! opened but unclosed quote anywhere on the line rejects it, while absent
//! quotes simply yield an absent argument. Bytes after the second argument
//! are ignored.

use bytes::Bytes;

use crate::error::ParseError;
use super::Command;

/// Maximum key or value length in bytes
pub const MAX_ARG_LEN: usize = 32;

/// Parse one line, already stripped of its terminator
pub fn parse_line(line: &[u8]) -> Result<Command, ParseError> {
    let mut pos = 0;
    let name = take_name(line, &mut pos);
    let first = take_quoted(line, &mut pos)?;
    let second = take_quoted(line, &mut pos)?;

    match name {
        b"READ" => Ok(Command::Read {
            key: require_arg(first)?,
        }),
        b"WRITE" => Ok(Command::Write {
            key: require_arg(first)?,
            value: require_arg(second)?,
        }),
        b"FORGET" => Ok(Command::Forget {
            key: require_arg(first)?,
        }),
        b"PRINT" => Ok(Command::Print),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Command name: the bytes from position 0 up to the first space
///
/// No trimming: a line starting with a space has an empty, invalid name.
fn take_name<'a>(line: &'a [u8], pos: &mut usize) -> &'a [u8] {
    let start = *pos;
    while *pos < line.len() && line[*pos] != b' ' {
        *pos += 1;
    }
    &line[start..*pos]
}

/// Next quoted argument, or None if no quote opens before the line ends
fn take_quoted(line: &[u8], pos: &mut usize) -> Result<Option<Bytes>, ParseError> {
    while *pos < line.len() && line[*pos] != b'"' {
        *pos += 1;
    }
    if *pos >= line.len() {
        return Ok(None);
    }
    *pos += 1; // opening quote

    let start = *pos;
    while *pos < line.len() && line[*pos] != b'"' {
        *pos += 1;
    }
    if *pos >= line.len() {
        return Err(ParseError::UnterminatedQuote);
    }
    let arg = Bytes::copy_from_slice(&line[start..*pos]);
    *pos += 1; // closing quote

    Ok(Some(arg))
}

/// Arguments must be present and within 1..=MAX_ARG_LEN bytes
fn require_arg(arg: Option<Bytes>) -> Result<Bytes, ParseError> {
    match arg {
        Some(arg) if !arg.is_empty() && arg.len() <= MAX_ARG_LEN => Ok(arg),
        _ => Err(ParseError::BadLength),
    }
}
