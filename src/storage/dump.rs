//! Diagnostic hex dump
//!
//! Renders the whole store as rows of 16 cells: the row's address, the
//! cells in hex, and an ASCII column with unprintable bytes shown as `.`.
//! Read-only.

use std::fmt::Write;

use crate::error::Result;
use super::ByteStore;

const ROW_LEN: usize = 16;

/// Render the full store as a dump block, CRLF line endings
///
/// The block is framed by blank lines on both sides:
///
/// ```text
/// 00000000  0C 61 AA 31 EE FF FF FF FF FF FF FF FF FF FF FF   | . a . 1 . . . . . . . . . . . .|
/// ```
pub fn hex_dump<S: ByteStore>(store: &S) -> Result<String> {
    let mut out = String::new();
    out.push_str("\r\n\r\n");

    for row in (0..store.capacity()).step_by(ROW_LEN) {
        let _ = write!(out, "{:08X}  ", row);

        for offset in 0..ROW_LEN {
            match cell(store, row + offset)? {
                Some(byte) => {
                    let _ = write!(out, "{:02X} ", byte);
                }
                None => out.push_str("   "),
            }
        }

        out.push_str("  |");
        for offset in 0..ROW_LEN {
            out.push(' ');
            out.push(match cell(store, row + offset)? {
                Some(byte) if (32..=126).contains(&byte) => byte as char,
                Some(_) => '.',
                None => ' ',
            });
        }
        out.push('|');
        out.push_str("\r\n");
    }

    out.push_str("\r\n\r\n");
    Ok(out)
}

/// Cell contents, or None past the end of a capacity not divisible by 16
fn cell<S: ByteStore>(store: &S, addr: usize) -> Result<Option<u8>> {
    if addr < store.capacity() {
        Ok(Some(store.read(addr)?))
    } else {
        Ok(None)
    }
}
