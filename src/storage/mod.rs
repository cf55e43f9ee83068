//! Storage Module
//!
//! The non-volatile byte store and the record format that lives inside it.
//!
//! ## Responsibilities
//! - Blocking byte-level access to a fixed-capacity region
//! - Sentinel-framed record encoding/decoding
//! - Linear scanning for key lookup and free-run allocation
//! - Hex+ASCII diagnostic dump
//!
//! ## On-store Record Format
//! ```text
//! ┌──────────────┬───────────┬─────────┬─────────────┬─────────┐
//! │ OCCUPIED (1) │    key    │ VAL (1) │    value    │ END (1) │
//! └──────────────┴───────────┴─────────┴─────────────┴─────────┘
//! ```
//! Every cell outside a record holds EMPTY. A forgotten record is rewritten
//! to EMPTY from its first byte through its END sentinel, so the span is
//! immediately reusable by an allocation of equal or lesser length.

mod backend;
mod record;
mod scanner;
mod dump;

pub use backend::{ByteStore, FileStore, MemStore};
pub use record::{decode_at, encode_at, encoded_len, Record, MIN_RECORD_LEN};
pub use scanner::{find, find_free_run};
pub use dump::hex_dump;

/// Cell never written, or reclaimed by a delete
pub const EMPTY: u8 = 0xFF;

/// First byte of a live record
pub const OCCUPIED: u8 = 0x0C;

/// Separator between key bytes and value bytes
pub const VAL: u8 = 0xAA;

/// Last byte of a live record
pub const END: u8 = 0xEE;
