//! Error types for nvkv
//!
//! Provides a unified error type for all operations, plus the two
//! recoverable taxonomies the session reports back over the wire.

use thiserror::Error;

/// Result type alias using NvError
pub type Result<T> = std::result::Result<T, NvError>;

/// Unified error type for nvkv operations
#[derive(Debug, Error)]
pub enum NvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Parse(#[from] ParseError),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record decode ran past capacity without finding its terminator.
    /// Indicates store corruption; recoverable at the session level.
    #[error("malformed record at address {addr:#06X}")]
    Malformed { addr: usize },

    #[error("address {addr} out of range (capacity {capacity})")]
    OutOfRange { addr: usize, capacity: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Rejections produced while tokenizing and validating one input line
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command")]
    UnknownCommand,

    #[error("argument length out of range")]
    BadLength,

    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Failures of store operations against live records
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("key already exists")]
    KeyExists,

    #[error("no contiguous free run large enough")]
    NoSpace,

    #[error("key not found")]
    KeyNotFound,
}
