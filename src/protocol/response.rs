//! Response definitions
//!
//! Typed command outcomes and their textual rendering on the stream.

use std::io::{self, Write};

use bytes::Bytes;

use crate::error::StoreError;

/// Outcome of one dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// READ hit: the stored value
    Value(Bytes),

    /// WRITE success: address of the new record
    Written { addr: usize },

    /// FORGET success; renders nothing
    Forgotten,

    /// READ/FORGET miss ("store empty" and "key absent" render the same)
    NotFound,

    /// WRITE rejected: the key already holds a record
    Exists,

    /// WRITE rejected: no contiguous free run is large enough
    NoSpace,

    /// PRINT: the rendered dump block
    Dump(String),

    /// The line failed to parse; nothing was executed
    BadInput,

    /// A record decode ran off the end of the store
    Corrupted,
}

impl Response {
    /// Render onto the output stream, CRLF line endings
    pub fn render<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Response::Value(value) => {
                writer.write_all(b"\r\n")?;
                writer.write_all(value)?;
                writer.write_all(b"\r\n")
            }
            Response::Written { addr } => write!(writer, "\r\n{:08X}\r\n", addr),
            Response::Forgotten => Ok(()),
            Response::NotFound => write!(writer, "\r\nnot found\r\n"),
            Response::Exists => write!(writer, "\r\nAlready exists\r\n"),
            Response::NoSpace => write!(writer, "\r\nNo space left\r\n"),
            Response::Dump(block) => writer.write_all(block.as_bytes()),
            Response::BadInput => write!(writer, "\r\nBad input - invalid format\r\n"),
            Response::Corrupted => write!(writer, "\r\ncorrupted store\r\n"),
        }
    }
}

impl From<StoreError> for Response {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::KeyExists => Response::Exists,
            StoreError::NoSpace => Response::NoSpace,
            StoreError::KeyNotFound => Response::NotFound,
        }
    }
}
