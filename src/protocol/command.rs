//! Command definitions
//!
//! The tagged union every accepted input line parses into; the engine
//! consumes it by exhaustive match.

use bytes::Bytes;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up a key and return its value
    Read { key: Bytes },

    /// Store a new key/value pair
    Write { key: Bytes, value: Bytes },

    /// Delete a key, reclaiming its record's bytes
    Forget { key: Bytes },

    /// Dump the whole store
    Print,
}

impl Command {
    /// Protocol name of this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Read { .. } => "READ",
            Command::Write { .. } => "WRITE",
            Command::Forget { .. } => "FORGET",
            Command::Print => "PRINT",
        }
    }
}
